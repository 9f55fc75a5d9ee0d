//! Lógica de la CLI separada de `main` para poder probarla con lectores y
//! escritores en memoria.
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use mapobject_core::{RecordMapper, DEFAULT_KEY_NAME};
use serde_json::Value;

use crate::config::CliConfig;
use crate::errors::CliError;

/// Convierte un objeto JSON `{clave: registro}` en un array de registros con
/// la clave inyectada.
#[derive(Debug, Parser)]
#[command(name = "mapobject", version)]
pub struct Args {
    /// Fichero JSON de entrada. Sin valor o `-` lee de stdin.
    pub input: Option<PathBuf>,

    /// Nombre del campo donde se inyecta la clave (por defecto `key`).
    #[arg(short, long)]
    pub key_name: Option<String>,

    /// Salida JSON indentada.
    #[arg(short, long, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Salida compacta aunque `MAPOBJECT_PRETTY` esté activo.
    #[arg(long, overrides_with = "pretty")]
    pub no_pretty: bool,

    /// Fichero de salida (por defecto stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parámetros efectivos tras combinar flags y configuración.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub key_name: String,
    pub pretty: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: &CliConfig) -> Self {
        let key_name = args
            .key_name
            .clone()
            .or_else(|| config.key_name.clone())
            .unwrap_or_else(|| DEFAULT_KEY_NAME.to_string());
        let pretty = if args.no_pretty { false } else { args.pretty || config.pretty };
        Self { key_name, pretty }
    }
}

/// Lee un objeto JSON de `reader`, lo mapea y escribe el array en `writer`.
/// Devuelve el número de registros escritos.
pub fn run<R: Read, W: Write>(settings: &Settings, reader: R, mut writer: W) -> Result<usize, CliError> {
    let input: Value = serde_json::from_reader(reader)?;
    let mapper = RecordMapper::with_key_name(settings.key_name.as_str());
    let output = mapper.map_to_value(input)?;
    let count = output.as_array().map_or(0, Vec::len);
    if settings.pretty {
        serde_json::to_writer_pretty(&mut writer, &output)?;
    } else {
        serde_json::to_writer(&mut writer, &output)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(count)
}

/// Abre entrada/salida según `args` y ejecuta `run`.
pub fn execute(args: &Args, config: &CliConfig) -> Result<usize, CliError> {
    let settings = Settings::resolve(args, config);
    debug!("settings: {settings:?}");

    let reader: Box<dyn Read> = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        _ => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match args.output.as_deref() {
        Some(path) => {
            debug!("writing {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    let count = run(&settings, reader, writer)?;
    info!("mapped {count} records (key_name={})", settings.key_name);
    Ok(count)
}
