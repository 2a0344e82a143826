use dg_assets::AssetRegistry;
use dg_core::{CellType, Generator, GeneratorConfig, Presenter, RenderError};
use dg_tui::input::Command;
use dg_tui::widgets::MapWidget;
use dg_tui::{App, GraphicsMode, TerminalPresenter, TextPresenter, Theme};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        width: 20,
        height: 10,
        max_rooms: 5,
        min_room_size: 3,
        max_room_size: 4,
        seed: Some(seed),
    }
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_map_widget_draws_frame_inside_border() {
    let mut generator = Generator::new(
        config(8),
        TerminalPresenter::new(Some(AssetRegistry::classic()), GraphicsMode::Classic, Theme::dark()),
    );
    generator.generate();
    let dungeon = generator.dungeon().unwrap().clone();
    let theme = Theme::dark();

    let mut terminal = Terminal::new(TestBackend::new(22, 12)).unwrap();
    terminal
        .draw(|f| {
            let widget = MapWidget::new(generator.presenter().frame(), &theme);
            f.render_widget(widget, f.area());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    for (x, y, cell) in dungeon.grid.iter() {
        let col = x as u16 + 1;
        let row = (dungeon.height() as i32 - y) as u16;
        assert_eq!(buffer[(col, row)].symbol(), cell.symbol().to_string());
    }
}

#[test]
fn test_map_widget_hint_when_nothing_rendered() {
    let theme = Theme::dark();
    let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();
    terminal
        .draw(|f| f.render_widget(MapWidget::new(None, &theme), f.area()))
        .unwrap();
    assert!(buffer_text(&terminal).contains("Nothing rendered"));
}

#[test]
fn test_map_title_uses_accent_color() {
    let theme = Theme::light();
    let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
    terminal
        .draw(|f| f.render_widget(MapWidget::new(None, &theme), f.area()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(1, 0)].symbol(), "D");
    assert_eq!(buffer[(1, 0)].fg, theme.accent);
    assert_eq!(buffer[(0, 1)].fg, theme.border);
}

#[test]
fn test_app_renders_status_after_generate() {
    let presenter =
        TerminalPresenter::new(Some(AssetRegistry::classic()), GraphicsMode::Classic, Theme::dark());
    let mut app = App::new(config(21), presenter, Theme::dark());
    app.execute(Command::Generate);

    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Map:20x10 Rooms:5 Size:3-4 Seed:21"));
    assert!(text.contains("(seed 21)"));

    app.execute(Command::Clear);
    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Cleared"));
    assert!(text.contains("Nothing rendered"));
}

#[test]
fn test_missing_assets_keep_dungeon() {
    let presenter = TerminalPresenter::new(None, GraphicsMode::Classic, Theme::dark());
    let mut app = App::new(config(3), presenter, Theme::dark());
    app.execute(Command::Generate);

    let report = app.last_report().unwrap();
    assert_eq!(
        report.warning(),
        Some(&RenderError::MissingAssets {
            cell: CellType::Floor
        })
    );
    assert!(app.generator().dungeon().is_some());
    assert!(app.generator().presenter().frame().is_none());

    let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    assert!(buffer_text(&terminal).contains("Warning: No drawable asset configured for floor cells"));
}

#[test]
fn test_text_presenter_generate_twice_same_seed() {
    let mut generator = Generator::new(config(77), TextPresenter::new(Some(AssetRegistry::classic())));
    generator.generate();
    let first = generator.presenter().output().unwrap().to_string();

    generator.clear();
    assert!(generator.presenter().output().is_none());

    generator.generate();
    assert_eq!(generator.presenter().output().unwrap(), first);
}

#[test]
fn test_text_presenter_direct_render() {
    let mut generator = Generator::new(config(5), TextPresenter::new(Some(AssetRegistry::classic())));
    generator.generate();
    let dungeon = generator.dungeon().unwrap().clone();

    let mut presenter = TextPresenter::new(Some(AssetRegistry::classic()));
    presenter.render(&dungeon).unwrap();
    let lines: Vec<&str> = presenter.output().unwrap().lines().collect();
    assert_eq!(lines.len(), dungeon.height());
    assert!(lines.iter().all(|l| l.chars().count() <= dungeon.width()));
}
