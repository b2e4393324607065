use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

const REDACTED: &str = "********";

#[derive(Parser, Debug)]
#[command(
    name = "pgopts",
    version,
    about = "Read and write libpq-style connection option strings"
)]
struct Args {
    /// Input file path (.json or option string). Omit or use '-' to read from stdin.
    #[arg(conflicts_with = "conninfo")]
    input: Option<String>,

    /// Option string given inline instead of an input file.
    #[arg(short = 'c', long, value_name = "string")]
    conninfo: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Force encode mode: JSON object to option string.
    #[arg(short = 'e', long, conflicts_with = "decode")]
    encode: bool,

    /// Force decode mode: option string to JSON object.
    #[arg(short = 'd', long)]
    decode: bool,

    /// JSON indentation size, 0 for compact output (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Mask the value of this key when decoding. Repeatable.
    #[arg(long, value_name = "key")]
    redact: Vec<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    Inline,
    File(String),
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(&args) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let (input_text, input_source) = read_input(args)?;
    let mode = resolve_mode(args, &input_source)?;
    tracing::debug!(?mode, ?input_source, "resolved mode");

    match mode {
        Mode::Encode => run_encode(args, &input_text, &input_source),
        Mode::Decode => run_decode(args, &input_text, &input_source),
    }
}

fn run_decode(args: &Args, input: &str, input_source: &InputSource) -> Result<(), Box<dyn Error>> {
    let mut value = pgopts::decode_to_value(input)?;
    if let Value::Object(map) = &mut value {
        redact(map, &args.redact);
    }

    let output = args.output.as_deref();
    with_output_writer(output, |writer| write_json(writer, &value, args.indent))?;
    if let Some(path) = output.filter(|path| *path != "-") {
        report_status(Mode::Decode, input_source, path);
    }
    Ok(())
}

fn run_encode(args: &Args, input: &str, input_source: &InputSource) -> Result<(), Box<dyn Error>> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Object(map) = value else {
        return Err("encode input must be a JSON object".into());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => {
                return Err(format!(
                    "value for {key:?} must be a string, number or boolean, got {other}"
                )
                .into())
            }
        };
        pairs.push((key, value));
    }

    let output = args.output.as_deref();
    with_output_writer(output, |writer| {
        pgopts::to_writer(writer, pairs.iter().map(|(key, value)| (key, value)))
            .map_err(|err| err.into())
    })?;
    if let Some(path) = output.filter(|path| *path != "-") {
        report_status(Mode::Encode, input_source, path);
    }
    Ok(())
}

fn redact(map: &mut Map<String, Value>, keys: &[String]) {
    for key in keys {
        if let Some(value) = map.get_mut(key) {
            *value = Value::String(REDACTED.to_string());
        }
    }
}

fn resolve_mode(args: &Args, input_source: &InputSource) -> Result<Mode, Box<dyn Error>> {
    if args.encode {
        return Ok(Mode::Encode);
    }

    if args.decode {
        return Ok(Mode::Decode);
    }

    match input_source {
        InputSource::Stdin | InputSource::Inline => Ok(Mode::Decode),
        InputSource::File(path) => match Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Mode::Encode),
            _ => Ok(Mode::Decode),
        },
    }
}

fn read_input(args: &Args) -> Result<(String, InputSource), Box<dyn Error>> {
    if let Some(conninfo) = &args.conninfo {
        return Ok((conninfo.clone(), InputSource::Inline));
    }

    match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

fn report_status(mode: Mode, input_source: &InputSource, output_path: &str) {
    let input_label = match input_source {
        InputSource::Stdin => "stdin",
        InputSource::Inline => "--conninfo",
        InputSource::File(path) => path.as_str(),
    };
    let verb = match mode {
        Mode::Encode => "Encoded",
        Mode::Decode => "Decoded",
    };
    println!("✔ {verb} {input_label} → {output_path}");
}
