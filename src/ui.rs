use crate::{
    app::App,
    colors::*,
    opener::Opener,
    utils::format_size,
    view::{Row, RowKind},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn ui<O: Opener>(f: &mut Frame, app: &mut App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Directory info
            Constraint::Min(0),    // Tree
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let [title_area, dir_info_area, list_area, footer_area] = *chunks else {
        return;
    };

    render_title_bar(f, title_area);
    render_directory_info(f, app, dir_info_area);
    render_tree(f, app, list_area);
    render_footer(f, app, footer_area);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_title_bar(f: &mut Frame, area: ratatui::layout::Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let terminal_width = f.area().width as usize;

    // " rfe vX.X.X    (press ? for help)"
    let title_len = 1 + 3 + 2 + version.len() + 11 + 1 + 10;
    let padding = terminal_width.saturating_sub(title_len);

    let title_bar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("rfe", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" v{}    (press ", version)),
        Span::styled("?", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(" for help)"),
        Span::raw(" ".repeat(padding)),
    ]))
    .style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(title_bar, area);
}

fn render_directory_info<O: Opener>(f: &mut Frame, app: &App<O>, area: ratatui::layout::Rect) {
    let view = app.view();
    let dir_info = format!(
        " {} ({} dirs, {} files)",
        app.current_path().display(),
        view.directory_count(),
        view.file_count()
    );
    let dir_line = Paragraph::new(Line::from(vec![Span::styled(
        dir_info,
        Style::default().fg(COLOR_DIR_INFO),
    )]))
    .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(dir_line, area);
}

fn tree_line(row: &Row) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    match row.kind {
        RowKind::Directory { loaded } => {
            // Unlisted directories still look expandable
            let marker = if loaded { "▾ " } else { "▸ " };
            Line::from(vec![
                Span::raw(format!("{:>10} | ", "")),
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(COLOR_MARKER)),
                Span::styled(format!("{}/", row.name), Style::default().fg(COLOR_DIRECTORY)),
            ])
        }
        RowKind::File { size } => {
            let size_str = size.map(format_size).unwrap_or_default();
            Line::from(vec![
                Span::styled(format!("{:>10}", size_str), Style::default().fg(COLOR_SIZE)),
                Span::raw(" | "),
                Span::raw(indent),
                Span::raw("  "),
                Span::styled(row.name.clone(), Style::default().fg(COLOR_FILE)),
            ])
        }
    }
}

fn render_tree<O: Opener>(f: &mut Frame, app: &mut App<O>, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .view()
        .rows
        .iter()
        .map(|row| ListItem::new(tree_line(row)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(Style::default().bg(COLOR_HIGHLIGHT_BG).fg(COLOR_HIGHLIGHT_FG));

    f.render_stateful_widget(list, area, &mut app.view_mut().state);
}

fn render_footer<O: Opener>(f: &mut Frame, app: &App<O>, area: ratatui::layout::Rect) {
    let terminal_width = f.area().width as usize;
    let view = app.view();
    let status_msg = view.status_message.as_deref().unwrap_or("");
    let footer_left = format!(" Sort mode: {}", view.sort_mode.name());
    let footer_right = if !status_msg.is_empty() {
        format!("  {} ", status_msg)
    } else {
        String::new()
    };
    let footer_padding = terminal_width.saturating_sub(footer_left.len() + footer_right.len());
    let footer_text = format!("{}{:padding$}{}", footer_left, "", footer_right, padding = footer_padding);

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(footer, area);
}

fn render_help_overlay(f: &mut Frame) {
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  rfe - Rust File Explorer", Style::default().fg(COLOR_HELP_TITLE).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("  Navigation:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    j / ↓           Move down 1 item"),
        Line::from("    k / ↑           Move up 1 item"),
        Line::from("    Ctrl+d / PgDn   Move down 10 items"),
        Line::from("    Ctrl+u / PgUp   Move up 10 items"),
        Line::from("    H / Home        Go to first item"),
        Line::from("    G / End         Go to last item"),
        Line::from(""),
        Line::from(Span::styled("  Actions:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    o / Enter       Enter directory / open file"),
        Line::from("    l / →           Expand directory"),
        Line::from("    h / ←           Collapse directory"),
        Line::from("    u / Bksp        Go up one level"),
        Line::from("    r               Refresh current view"),
        Line::from(""),
        Line::from(Span::styled("  Display:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    s               Cycle sort mode"),
        Line::from(""),
        Line::from(Span::styled("  Other:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    ?               Toggle this help"),
        Line::from("    q / Esc         Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", Style::default().fg(COLOR_HELP_HINT))),
        Line::from(""),
    ];

    let help_height = help_text.len() as u16 + 2;
    let help_width = 48;
    let area = f.area();
    let help_area = ratatui::layout::Rect {
        x: area.width.saturating_sub(help_width) / 2,
        y: area.height.saturating_sub(help_height) / 2,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);
    let help_block = Paragraph::new(help_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(Color::Black)))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(help_block, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{controller::Controller, error::OpenError, sort::SortMode, view::TreeView};
    use ratatui::{backend::TestBackend, Terminal};
    use std::{fs, path::Path};
    use tempfile::TempDir;

    struct NoOpener;

    impl Opener for NoOpener {
        fn open(&mut self, _path: &Path) -> Result<(), OpenError> {
            Ok(())
        }
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn frame_shows_path_rows_and_markers() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::write(tmp.path().join("notes.txt"), b"abc")?;
        fs::create_dir(tmp.path().join("src"))?;
        let controller = Controller::initialize(tmp.path(), TreeView::new(SortMode::Name), NoOpener)?;
        let mut app = App::new(controller);

        let mut terminal = Terminal::new(TestBackend::new(100, 12))?;
        terminal.draw(|f| ui(f, &mut app))?;
        let text = screen(&terminal);

        assert!(text.contains("rfe v"));
        assert!(text.contains("(1 dirs, 1 files)"));
        assert!(text.contains("notes.txt"));
        assert!(text.contains("3 B"));
        assert!(text.contains("▸ src/"));
        assert!(text.contains("Sort mode: name"));
        Ok(())
    }

    #[test]
    fn help_overlay_is_drawn() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let controller = Controller::initialize(tmp.path(), TreeView::default(), NoOpener)?;
        let mut app = App::new(controller);
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(80, 40))?;
        terminal.draw(|f| ui(f, &mut app))?;
        assert!(screen(&terminal).contains("Rust File Explorer"));
        Ok(())
    }
}
