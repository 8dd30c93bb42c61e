use crate::error::OpenError;
use std::path::Path;
use tracing::info;

/// Hands a file to something outside the browser.
pub trait Opener {
    fn open(&mut self, path: &Path) -> Result<(), OpenError>;
}

/// Launches files with the host's default handler or a configured program.
/// Both go through `open`'s detached launch, so no child is left to reap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SystemOpener {
    /// `open` on macOS, the default handler on Windows, `xdg-open` and
    /// friends elsewhere.
    #[default]
    Default,
    /// Program run with the path as its only argument.
    Command(String),
}

impl SystemOpener {
    pub fn from_command(command: Option<String>) -> Self {
        match command {
            Some(cmd) if !cmd.trim().is_empty() => SystemOpener::Command(cmd.trim().to_string()),
            _ => SystemOpener::Default,
        }
    }
}

impl Opener for SystemOpener {
    fn open(&mut self, path: &Path) -> Result<(), OpenError> {
        let result = match self {
            SystemOpener::Default => open::that_detached(path),
            SystemOpener::Command(program) => open::with_detached(path, program.as_str()),
        };
        result.map_err(|source| OpenError {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "opened file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_command_falls_back_to_default() {
        assert_eq!(SystemOpener::from_command(None), SystemOpener::Default);
        assert_eq!(
            SystemOpener::from_command(Some("   ".to_string())),
            SystemOpener::Default
        );
        assert_eq!(
            SystemOpener::from_command(Some(" code ".to_string())),
            SystemOpener::Command("code".to_string())
        );
    }

    #[test]
    fn missing_program_is_an_open_error() {
        let mut opener = SystemOpener::Command("rfe-no-such-program-here".to_string());
        let err = opener.open(Path::new("/tmp/proj/a.txt")).err();
        assert_eq!(
            err.map(|e| e.path),
            Some(Path::new("/tmp/proj/a.txt").to_path_buf())
        );
    }

    /// Zombie children of this process whose command is `comm`.
    #[cfg(target_os = "linux")]
    fn zombie_children(comm: &str) -> std::io::Result<usize> {
        let me = std::process::id().to_string();
        let mut count = 0;
        for entry in std::fs::read_dir("/proc")? {
            let Ok(stat) = std::fs::read_to_string(entry?.path().join("stat")) else {
                continue;
            };
            // "<pid> (<comm>) <state> <ppid> ..."
            let Some((head, tail)) = stat.rsplit_once(')') else {
                continue;
            };
            let name = head.split_once('(').map(|(_, name)| name);
            let mut fields = tail.split_whitespace();
            let (state, ppid) = (fields.next(), fields.next());
            if name == Some(comm) && state == Some("Z") && ppid == Some(me.as_str()) {
                count += 1;
            }
        }
        Ok(count)
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn configured_command_leaves_no_zombies() -> Result<(), Box<dyn std::error::Error>> {
        let mut opener = SystemOpener::Command("true".to_string());
        for _ in 0..3 {
            opener.open(Path::new("/tmp/proj/a.txt"))?;
        }
        std::thread::sleep(std::time::Duration::from_millis(200));
        assert_eq!(zombie_children("true")?, 0);
        Ok(())
    }
}
