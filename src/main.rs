use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossbeam_channel::{select, unbounded, Receiver};
use crossterm::cursor;
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal;
use tracing::info;
use tui::backend::CrosstermBackend;
use tui::Terminal;

mod app;
mod draw;
mod event;
mod logging;
mod opts;
mod summary;
mod theme;
mod widget;

fn main() -> Result<()> {
    better_panic::install();

    let opts = opts::resolve_opts();

    let log_target = logging::LogTarget::for_mode(opts.log_file.as_ref(), !opts.summary);
    logging::init(opts.log_level(), log_target)?;

    info!(
        summary = opts.summary,
        currency = opts.currency(),
        "starting tartan"
    );

    if opts.summary {
        return summary::run(&opts);
    }

    let mut app = app::App::new(&opts);

    // Inputs given up front are calculated straight away
    if opts.price.is_some() && opts.rent.is_some() {
        app.calculate();
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    setup_panic_hook();
    setup_terminal()?;

    let ui_events = setup_ui_events();
    let ctrl_c_events = setup_ctrl_c()?;

    let result = run(&mut terminal, &mut app, ui_events, ctrl_c_events);

    cleanup_terminal()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut app::App,
    ui_events: Receiver<Event>,
    ctrl_c_events: Receiver<()>,
) -> Result<()> {
    draw::draw(terminal, app)?;

    loop {
        select! {
            recv(ctrl_c_events) -> _ => {
                break;
            }
            recv(ui_events) -> message => {
                match message {
                    Ok(Event::Key(key_event)) => {
                        match event::handle_key_bindings(app.mode, key_event, app) {
                            event::Action::Quit => break,
                            event::Action::Redraw => draw::draw(terminal, app)?,
                        }
                    }
                    Ok(Event::Resize(..)) => {
                        draw::draw(terminal, app)?;
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
    }

    info!("exiting tartan");

    Ok(())
}

fn setup_terminal() -> Result<()> {
    let mut stdout = io::stdout();

    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, cursor::Hide)?;

    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    terminal::enable_raw_mode().context("failed to enable raw mode")?;

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    let mut stdout = io::stdout();

    execute!(stdout, cursor::MoveTo(0, 0))?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    execute!(stdout, terminal::LeaveAlternateScreen)?;
    execute!(stdout, cursor::Show)?;

    terminal::disable_raw_mode().context("failed to disable raw mode")?;

    Ok(())
}

fn setup_ui_events() -> Receiver<Event> {
    let (sender, receiver) = unbounded();
    std::thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if sender.send(event).is_err() {
                break;
            }
        }
    });

    receiver
}

fn setup_ctrl_c() -> Result<Receiver<()>> {
    let (sender, receiver) = unbounded();
    ctrlc::set_handler(move || {
        let _ = sender.send(());
    })
    .context("failed to set ctrl-c handler")?;

    Ok(receiver)
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
