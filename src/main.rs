use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;

use search_select::cli::CliArgs;
use search_select::config::WidgetConfig;
use search_select::grid::{CellEditor, CellEditorConfig, DataSource};
use search_select::messages::{Direction, Key, Msg};
use search_select::model::{SearchSelect, Source};
use search_select::policy::Mode;
use search_select::registry::{EntityDomain, NameLookup, OptionLookup, StaticRegistry};
use search_select::runtime::{FieldRuntime, Host, Widget};

/// How long `wait` lets pending timers and lookups run
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// One line of the stdin script
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Dispatch(Msg),
    Wait,
    Show,
}

/// Host that reports every callback as a JSON line
struct PrintHost<W: Write> {
    out: W,
}

impl<W: Write> PrintHost<W> {
    fn emit(&mut self, event: serde_json::Value) {
        if let Err(e) = writeln!(self.out, "{}", event) {
            tracing::warn!("Failed to write event: {}", e);
        }
    }
}

impl<W: Write> Host for PrintHost<W> {
    fn on_change(&mut self, value: String) {
        self.emit(json!({ "event": "change", "value": value }));
    }

    fn stop_editing(&mut self, cancel: bool) {
        self.emit(json!({ "event": "stop_editing", "cancel": cancel }));
    }
}

fn parse_step(line: &str) -> Result<Option<Step>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let msg = match word {
        "wait" => return Ok(Some(Step::Wait)),
        "show" => return Ok(Some(Step::Show)),
        "focus" => Msg::Focus,
        "type" => Msg::SetInput(rest.to_string()),
        "char" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Msg::InsertChar(ch),
                _ => bail!("`char` takes exactly one character, got {:?}", rest),
            }
        }
        "backspace" => Msg::DeleteBackward,
        "backspace-word" => Msg::DeleteWordBackward,
        "clear" => Msg::Clear,
        "enter" => Msg::Key(Key::Enter),
        "tab" => Msg::Key(Key::Tab),
        "escape" => Msg::Key(Key::Escape),
        "up" => Msg::arrow(Direction::Up),
        "down" => Msg::arrow(Direction::Down),
        "left" => Msg::arrow(Direction::Left),
        "right" => Msg::arrow(Direction::Right),
        "hover" => Msg::Hover(parse_index(rest)?),
        "select" => Msg::SelectOption(parse_index(rest)?),
        "blur" => Msg::Blur,
        "click-outside" => Msg::ClickOutside,
        "set-value" => Msg::SetValue(rest.to_string()),
        other => bail!("unknown script command {:?}", other),
    };
    Ok(Some(Step::Dispatch(msg)))
}

fn parse_index(text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .with_context(|| format!("expected a row index, got {:?}", text))
}

fn load_registry(path: Option<PathBuf>, domain: EntityDomain) -> Result<StaticRegistry> {
    if let Some(path) = path {
        return StaticRegistry::load(&path)
            .with_context(|| format!("Failed to load registry {}", path.display()));
    }

    if let Some(dir) = search_select::config_paths::registries_dir() {
        let path = dir.join(format!("{}.csv", domain.key()));
        if path.exists() {
            return StaticRegistry::load(&path);
        }
    }

    tracing::info!("No registry file for {:?}, using sample names", domain);
    Ok(StaticRegistry::new(sample_names(domain).iter().copied()))
}

fn sample_names(domain: EntityDomain) -> &'static [&'static str] {
    match domain {
        EntityDomain::Facility => &["North Warehouse", "South Warehouse", "Main Plant"],
        EntityDomain::Location => &["Aisle 1", "Aisle 2", "Cold Storage", "Loading Dock"],
        EntityDomain::Supplier => &["Acme Corp", "Acme Industrial", "Globex", "Initech"],
        EntityDomain::ItemType => &["Fastener", "Filter", "Gasket", "Valve"],
        EntityDomain::UseCase => &["Maintenance", "Production", "Safety"],
    }
}

fn run_script<W, H, R>(runtime: &mut FieldRuntime<W, H>, script: R, out: &mut impl Write) -> Result<()>
where
    W: Widget,
    H: Host,
    R: BufRead,
{
    for (number, line) in script.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let step = parse_step(&line).with_context(|| format!("script line {}", number + 1))?;
        match step {
            None => {}
            Some(Step::Dispatch(msg)) => {
                runtime.dispatch(msg);
                runtime.pump();
            }
            Some(Step::Wait) => {
                if !runtime.settle(SETTLE_TIMEOUT) {
                    tracing::warn!("wait: {} results still pending", runtime.pending());
                }
            }
            Some(Step::Show) => {
                let snapshot = serde_json::to_string(&runtime.widget().field().snapshot())?;
                writeln!(out, "{}", snapshot)?;
            }
        }
    }

    // Deliver anything already queued (e.g. a deferred stop_editing)
    runtime.settle(SETTLE_TIMEOUT);
    let snapshot = serde_json::to_string(&runtime.widget().field().snapshot())?;
    writeln!(out, "{}", snapshot)?;
    Ok(())
}

fn main() -> Result<()> {
    search_select::tracing::init();

    let args = CliArgs::parse();
    let mut settings = WidgetConfig::load();
    if let Some(debounce_ms) = args.debounce_ms {
        settings.debounce_ms = debounce_ms;
    }

    let registry = load_registry(args.registry, args.domain)?;
    let lookup: Arc<dyn OptionLookup> = Arc::new(NameLookup::new(registry));
    let field_config = settings.field_config(args.domain);

    tracing::info!(
        "Mounting {:?} field in {:?} mode (debounce {}ms)",
        args.domain,
        args.mode,
        field_config.debounce_ms
    );

    let stdin = io::stdin();

    match args.mode {
        Mode::Form => {
            let field = SearchSelect::new(args.value, Mode::Form, field_config, Source::Remote(lookup));
            let mut runtime = FieldRuntime::new(field, PrintHost { out: io::stdout() });
            run_script(&mut runtime, stdin.lock(), &mut io::stdout())
        }
        Mode::CellEditor => {
            let mut config = CellEditorConfig::new(DataSource::Async(lookup))
                .with_placeholder(field_config.placeholder)
                .with_debounce_ms(field_config.debounce_ms);
            config.create_noun = field_config.noun;
            let editor = CellEditor::new(args.value, config);
            let handle = editor.handle();
            let mut runtime = FieldRuntime::new(editor, PrintHost { out: io::stdout() });
            run_script(&mut runtime, stdin.lock(), &mut io::stdout())?;
            println!("{}", json!({ "event": "cell_value", "value": handle.get_value() }));
            Ok(())
        }
    }
}
