mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use std::io::{self, IsTerminal, Read, Write};
use winbuf::RingBuffer;

#[derive(Parser, Debug)]
#[command(name = "winbuf", about = "Push values through a fixed-size ring buffer", version = "0.1")]
struct Cli {
    /// Values to append, oldest first. Read from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Buffer capacity (defaults to buffer.capacity from the config file)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Print the value at a logical index (0 = oldest). Repeatable.
    #[arg(long = "get", value_name = "INDEX")]
    gets: Vec<usize>,

    /// Overwrite a logical slot after appending, e.g. --set 0=1.5. Repeatable.
    #[arg(long = "set", value_name = "INDEX=VALUE", value_parser = parse_set)]
    sets: Vec<(usize, f64)>,

    /// Clear the buffer after appending and setting
    #[arg(long)]
    clear: bool,

    /// Print a JSON snapshot instead of the summary line
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let cfg = Config::load();

    if cli.config {
        return run_print_config(&cfg);
    }

    let stdin = io::stdin();
    let input = if stdin.is_terminal() { None } else { Some(stdin.lock()) };
    run(cli, &cfg, input, io::stdout().lock())
}

/// Build the buffer, then append, set, clear and get in that order.
/// `input` is only read when no positional values were given.
fn run<R: Read, W: Write>(cli: Cli, cfg: &Config, input: Option<R>, mut out: W) -> Result<()> {
    let cap = cli.capacity.unwrap_or(cfg.buffer.capacity);
    let mut buf: RingBuffer<f64> = RingBuffer::new(cap)?;

    let values = match input {
        Some(r) if cli.values.is_empty() => read_values(r)?,
        _ => cli.values,
    };
    log::info!("appending {} values to buffer of capacity {}", values.len(), cap);
    buf.extend(values);

    for &(index, value) in &cli.sets {
        buf.set(index, value)?;
    }
    if cli.clear {
        buf.clear();
    }
    for &index in &cli.gets {
        writeln!(out, "{}", buf.get(index)?)?;
    }

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&buf)?)?;
    } else {
        writeln!(out, "{}", cfg.summary.render(&buf))?;
    }
    Ok(())
}

fn read_values<R: Read>(mut r: R) -> Result<Vec<f64>> {
    let mut text = String::new();
    r.read_to_string(&mut text).context("reading values from stdin")?;
    parse_values(&text)
}

fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .map(|tok| tok.parse::<f64>().with_context(|| format!("invalid value {:?}", tok)))
        .collect()
}

fn parse_set(s: &str) -> Result<(usize, f64), String> {
    let (index, value) = s.split_once('=').ok_or_else(|| format!("expected INDEX=VALUE, got {:?}", s))?;
    let index = index.trim().parse().map_err(|e| format!("bad index {:?}: {}", index, e))?;
    let value = value.trim().parse().map_err(|e| format!("bad value {:?}: {}", value, e))?;
    Ok((index, value))
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[buffer]");
    println!("  capacity  = {}", cfg.buffer.capacity);
    println!();
    println!("[summary]");
    println!("  threshold = {}", cfg.summary.threshold);
    println!("  head      = {}", cfg.summary.head);
    Ok(())
}
