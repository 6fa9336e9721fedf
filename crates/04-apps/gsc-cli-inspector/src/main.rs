//! Command-line inspector for Gold/Silver memory dumps and ROM images.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gsc_catalog::inventory::{read_bag_items, write_bag_items, BagItem};
use gsc_catalog::{
    poke_byte, read_rom_field, snapshot, snapshot_keys, Catalog, FieldValue, MemoryImage,
};
use gsc_codec::{decode_gsc_text, encode_gsc_text};
use inspector_vm::PanelVM;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Text rendering helpers used by the CLI commands.
mod render {
    use gsc_catalog::inventory::BagItem;
    use gsc_catalog::{FieldValue, MemField, Snapshot};
    use inspector_vm::PanelVM;
    use std::fmt::Write;

    pub fn value(value: &FieldValue) -> String {
        match value {
            FieldValue::Int(v) => format!("{v} (0x{v:X})"),
            FieldValue::Bytes(bytes) => format!("[{}]", hex_bytes(bytes)),
        }
    }

    fn hex_bytes(bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One `key @ADDR = value` line.
    pub fn field_line(key: &str, addr: u16, value: &FieldValue) -> String {
        format!("{key} @{addr:04X} = {}\n", self::value(value))
    }

    /// Catalog listing: address, size, encoding, key and description.
    pub fn fields<'a>(fields: impl IntoIterator<Item = &'a MemField>) -> String {
        let mut out = String::new();
        for field in fields {
            let line = format!(
                "{:04X} {:>3} {:<8} {:<16} {}",
                field.addr, field.size, field.enc, field.key, field.doc
            );
            writeln!(out, "{}", line.trim_end()).expect("write field");
        }
        out
    }

    pub fn snapshot(snap: &Snapshot) -> String {
        let mut out = String::new();
        for (key, value) in snap.iter() {
            writeln!(out, "{key} = {}", self::value(value)).expect("write entry");
        }
        out
    }

    /// Fixed-width watch panel.
    pub fn panel(vm: &PanelVM) -> String {
        let mut out = String::from("=== Memory Panel ===\n");
        for row in &vm.rows {
            let Some(addr) = row.addr else {
                writeln!(out, "{:<12} <missing field>", row.key).expect("write missing");
                continue;
            };
            let shown = match (&row.value, &row.error) {
                (Some(value), _) => self::value(value),
                (None, Some(err)) => format!("<err {err}>"),
                (None, None) => "<no value>".to_owned(),
            };
            writeln!(out, "{:<12} @{addr:04X} = {shown}", row.key).expect("write row");
        }
        out
    }

    pub fn bag(items: &[BagItem]) -> String {
        let mut out = format!("Bag: {} item(s)\n", items.len());
        for item in items {
            writeln!(out, "  0x{:02X} x{}", item.id, item.qty).expect("write item");
        }
        out
    }

    /// Hexdump with 16 bytes per line. Offsets widen to six digits once the
    /// dump leaves the 16-bit address space.
    pub fn hexdump(base: usize, bytes: &[u8]) -> String {
        let width = if base + bytes.len() > 0x1_0000 { 6 } else { 4 };
        let mut out = String::new();
        for (idx, chunk) in bytes.chunks(16).enumerate() {
            let line_base = base + idx * 16;
            writeln!(out, "{line_base:0width$X}: {}", hex_bytes(chunk)).expect("write line");
        }
        if bytes.is_empty() {
            writeln!(out, "{base:0width$X}:").expect("write empty");
        }
        out
    }
}

/// Read and edit Pokémon Gold/Silver memory through the field catalog.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect Gold/Silver RAM dumps and ROM tables",
    long_about = None
)]
struct Cli {
    /// Address the first byte of a memory dump is mapped at.
    #[arg(long, global = true, value_parser = parse_u16, default_value_t = 0)]
    base: u16,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog fields.
    Fields {
        /// Only list keys starting with this prefix.
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Read one field.
    Get {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        key: String,
        /// Also decode the bytes as game text.
        #[arg(long)]
        text: bool,
    },
    /// Write one field and save the dump in place.
    Set {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        key: String,
        /// Integer (decimal or 0x hex) or hex bytes, depending on the field.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Encode VALUE as game text.
        #[arg(long)]
        text: bool,
    },
    /// Write a single raw byte, clamped to 0..=255.
    Poke {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        #[arg(value_parser = parse_u16, value_name = "ADDR")]
        addr: u16,
        #[arg(value_parser = parse_int, allow_hyphen_values = true, value_name = "VALUE")]
        value: i64,
    },
    /// Read many fields at once (all fields by default).
    Snapshot {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        /// Comma-separated keys to read.
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the watch panel; failing rows do not abort the panel.
    Panel {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        /// Comma-separated keys to watch (defaults to the built-in list).
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the bag pocket, optionally replacing it first.
    Bag {
        #[arg(value_name = "MEMORY")]
        mem: PathBuf,
        /// Replacement contents as ID:QTY pairs (hex or decimal).
        #[arg(long = "set", value_parser = parse_bag_item, num_args = 0.., value_name = "ID:QTY")]
        set: Option<Vec<BagItem>>,
    },
    /// Dump a ROM table.
    Rom {
        #[arg(value_name = "ROM")]
        rom: PathBuf,
        key: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// One JSON object per line.
    Ndjson,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let catalog = Catalog::global()?;
    debug!("catalog ready: {} RAM field(s)", catalog.len());

    match cli.command {
        Command::Fields { prefix } => handle_fields(catalog, prefix.as_deref()),
        Command::Get { mem, key, text } => {
            handle_get(catalog, &load_memory(&mem, cli.base)?, &key, text)
        }
        Command::Set {
            mem,
            key,
            value,
            text,
        } => handle_set(catalog, &mem, cli.base, &key, &value, text),
        Command::Poke { mem, addr, value } => handle_poke(&mem, cli.base, addr, value),
        Command::Snapshot { mem, keys, format } => {
            handle_snapshot(catalog, &load_memory(&mem, cli.base)?, &keys, format)
        }
        Command::Panel { mem, keys, format } => {
            handle_panel(catalog, &load_memory(&mem, cli.base)?, &keys, format)
        }
        Command::Bag { mem, set } => handle_bag(&mem, cli.base, set.as_deref()),
        Command::Rom { rom, key } => handle_rom(catalog, &rom, &key),
    }
}

fn load_memory(path: &Path, base: u16) -> Result<MemoryImage> {
    MemoryImage::load(path, base).with_context(|| format!("failed to read memory dump {path:?}"))
}

fn save_memory(path: &Path, image: &MemoryImage) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("failed to write memory dump {path:?}"))?;
    info!("saved {} byte(s) to {path:?}", image.len());
    Ok(())
}

fn handle_fields(catalog: &Catalog, prefix: Option<&str>) -> Result<()> {
    let prefix = prefix.unwrap_or_default();
    print!(
        "{}",
        render::fields(catalog.fields().filter(|field| field.key.starts_with(prefix)))
    );
    Ok(())
}

fn handle_get(catalog: &Catalog, image: &MemoryImage, key: &str, text: bool) -> Result<()> {
    let field = catalog.field(key)?;
    let value = catalog.read(image, key)?;
    print!("{}", render::field_line(key, field.addr, &value));
    if text {
        match value.as_bytes() {
            Some(raw) => println!("text: {:?}", decode_gsc_text(raw)),
            None => bail!("field {key} is not a byte field"),
        }
    }
    Ok(())
}

fn handle_set(
    catalog: &Catalog,
    path: &Path,
    base: u16,
    key: &str,
    raw: &str,
    text: bool,
) -> Result<()> {
    let field = catalog.field(key)?;
    let value = if text {
        if field.enc.is_integer() {
            bail!("field {key} holds an integer, not text");
        }
        FieldValue::Bytes(encode_gsc_text(raw, field.size))
    } else if field.enc.is_integer() {
        FieldValue::Int(parse_int(raw).map_err(anyhow::Error::msg)?)
    } else {
        FieldValue::Bytes(parse_bytes(raw).map_err(anyhow::Error::msg)?)
    };

    let mut image = load_memory(path, base)?;
    catalog.write(&mut image, key, &value)?;
    save_memory(path, &image)?;

    let stored = catalog.read(&image, key)?;
    if let Some((asked, kept)) = int_adjusted(&value, &stored) {
        warn!("{key}: {asked} does not fit {}, stored {kept}", field.enc);
    }
    print!("{}", render::field_line(key, field.addr, &stored));
    Ok(())
}

/// Requested and stored integers when encoding truncated or clamped the value.
fn int_adjusted(asked: &FieldValue, stored: &FieldValue) -> Option<(i64, i64)> {
    let (asked, stored) = (asked.as_int()?, stored.as_int()?);
    (asked != stored).then_some((asked, stored))
}

fn handle_poke(path: &Path, base: u16, addr: u16, value: i64) -> Result<()> {
    let mut image = load_memory(path, base)?;
    let byte = poke_byte(&mut image, addr, value)?;
    save_memory(path, &image)?;
    print!("{}", render::field_line("poke", addr, &FieldValue::from(byte)));
    Ok(())
}

fn handle_snapshot(
    catalog: &Catalog,
    image: &MemoryImage,
    keys: &[String],
    format: OutputFormat,
) -> Result<()> {
    let snap = if keys.is_empty() {
        snapshot(catalog, image)?
    } else {
        snapshot_keys(catalog, image, keys)?
    };
    match format {
        OutputFormat::Text => print!("{}", render::snapshot(&snap)),
        OutputFormat::Ndjson => println!("{}", serde_json::to_string(&snap)?),
    }
    Ok(())
}

fn handle_panel(
    catalog: &Catalog,
    image: &MemoryImage,
    keys: &[String],
    format: OutputFormat,
) -> Result<()> {
    let vm = if keys.is_empty() {
        PanelVM::capture_default(catalog, image)
    } else {
        PanelVM::capture(catalog, image, keys)
    };
    match format {
        OutputFormat::Text => print!("{}", render::panel(&vm)),
        OutputFormat::Ndjson => print!("{}", vm.to_ndjson_line()?),
    }
    Ok(())
}

fn handle_bag(path: &Path, base: u16, replacement: Option<&[BagItem]>) -> Result<()> {
    let mut image = load_memory(path, base)?;
    if let Some(items) = replacement {
        let written = write_bag_items(&mut image, items)?;
        if written < items.len() {
            warn!("dropped {} bag item(s)", items.len() - written);
        }
        save_memory(path, &image)?;
    }
    print!("{}", render::bag(&read_bag_items(&image)?));
    Ok(())
}

fn handle_rom(catalog: &Catalog, path: &Path, key: &str) -> Result<()> {
    let rom = fs::read(path).with_context(|| format!("failed to read ROM {path:?}"))?;
    let field = catalog.rom_field(key)?;
    let (start, _) = field.file_span()?;
    let bytes = read_rom_field(&rom, field)?;
    println!("{key}: {} ({} bytes)", field.desc, bytes.len());
    print!("{}", render::hexdump(start, bytes));
    Ok(())
}

fn strip_hex_prefix(input: &str) -> Option<&str> {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
}

fn parse_u16(input: &str) -> Result<u16, String> {
    if let Some(stripped) = strip_hex_prefix(input) {
        u16::from_str_radix(stripped, 16).map_err(|_| format!("invalid hex value '{input}'"))
    } else {
        input
            .parse::<u16>()
            .map_err(|_| format!("invalid number '{input}'"))
    }
}

fn parse_int(input: &str) -> Result<i64, String> {
    let input = input.trim();
    if let Some(stripped) = strip_hex_prefix(input) {
        i64::from_str_radix(stripped, 16).map_err(|_| format!("invalid hex value '{input}'"))
    } else {
        input
            .parse::<i64>()
            .map_err(|_| format!("invalid number '{input}'"))
    }
}

/// Hex pairs separated by spaces or commas (`0x` prefixes allowed), or one
/// compact even-length hex string.
fn parse_bytes(input: &str) -> Result<Vec<u8>, String> {
    let cleaned = input.replace(',', " ").replace("0x", " ");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    let hex_byte =
        |part: &str| u8::from_str_radix(part, 16).map_err(|_| format!("invalid hex byte '{part}'"));
    match parts.as_slice() {
        [] => Ok(Vec::new()),
        [compact] => {
            if compact.len() % 2 != 0 {
                return Err(format!("hex string '{compact}' must have even length"));
            }
            (0..compact.len())
                .step_by(2)
                .map(|idx| {
                    compact
                        .get(idx..idx + 2)
                        .ok_or_else(|| format!("invalid hex string '{compact}'"))
                        .and_then(hex_byte)
                })
                .collect()
        }
        many => many.iter().map(|part| hex_byte(part)).collect(),
    }
}

fn parse_bag_item(input: &str) -> Result<BagItem, String> {
    let (id, qty) = input
        .split_once(':')
        .ok_or_else(|| format!("expected ID:QTY, got '{input}'"))?;
    let id = parse_int(id)?;
    let qty = parse_int(qty)?;
    let id = u8::try_from(id).map_err(|_| format!("item id {id} out of range"))?;
    Ok(BagItem::new(id, qty.clamp(0, 0xFF) as u8))
}
