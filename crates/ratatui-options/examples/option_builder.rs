use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_options::builder::BuilderAction;
use ratatui_options::builder::BuilderEvent;
use ratatui_options::builder::OptionBuilder;
use ratatui_options::crossterm_input::input_event_from_crossterm;
use ratatui_options::field::BuilderConfig;
use ratatui_options::field::FieldMap;
use ratatui_options::field::HostField;
use ratatui_options::option_builder::OptionBuilderView;
use ratatui_options::theme::Theme;
use std::io;
use std::time::Duration;

const MODES: [&str; 4] = ["select", "radio", "checkbox", "text"];

fn main() -> io::Result<()> {
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "a^Apple~b^Banana~c^Cherry".to_string());
    let mut fields = FieldMap::new()
        .with("type", HostField::select(MODES, "select"))
        .with("question", HostField::text("Favourite fruit"))
        .with("source", HostField::text(source));
    let config = BuilderConfig::new("source", "type", "question");
    let builder = OptionBuilder::initialize(config, &mut fields)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let mut view = OptionBuilderView::new(builder);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let theme = Theme::default();

    let res = run(&mut terminal, &theme, &mut fields, &mut view);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res?;

    println!("{}", fields.value("source").unwrap_or_default());
    Ok(())
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    fields: &mut FieldMap,
    view: &mut OptionBuilderView,
) -> io::Result<()> {
    let mut mode_index = 0;
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("Option builder (F2 mode, Esc quit)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let cursor = view.render(inner, f.buffer_mut(), theme);
            if let Some((x, y)) = cursor {
                f.set_cursor_position((x, y));
            }

            let source = fields.value("source").unwrap_or_default();
            let status_span = Span::styled(format!("source: {source}"), theme.text_muted);
            f.buffer_mut()
                .set_span(status.x, status.y, &status_span, status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                return Ok(());
            }
            if key.code == KeyCode::F(2) {
                mode_index = (mode_index + 1) % MODES.len();
                fields.set_value("type", MODES[mode_index]);
                let config = view.builder().config().clone();
                if let Some(event) =
                    BuilderEvent::from_field_change(&config, "type", MODES[mode_index])
                {
                    view.handle_builder_event(event);
                }
                continue;
            }
        }

        if let Some(ev) = input_event_from_crossterm(ev) {
            if let BuilderAction::SourceChanged(_) = view.handle_event(ev) {
                view.builder().write_back(fields);
            }
        }
    }
}
