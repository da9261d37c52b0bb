use anyhow::{Context, Result};
use clap::Parser;
use probe_decode::{
    commands::{DecodeCmd, TablesCmd},
    PROBE_DECODE_VERSION_MESSAGE,
};

// Main enum defining probe-decode subcommands.
#[derive(Parser)]
#[command(
    name = "probe-decode",
    bin_name = "probe-decode",
    version = PROBE_DECODE_VERSION_MESSAGE,
    about = "Decode ARM instructions the way a probe would",
    long_about = "probe-decode reports whether an instruction can be probed, whether it is \
                  simulated or emulated out of line, and the slot prepared for it."
)]
pub enum ProbeDecode {
    Decode(DecodeCmd),
    Tables(TablesCmd),
}

fn main() -> Result<()> {
    probe_decode::tracing::init()?;

    let args = ProbeDecode::parse();

    match args {
        ProbeDecode::Decode(cmd) => {
            cmd.run().context("Error executing Decode command")?;
        }
        ProbeDecode::Tables(cmd) => {
            cmd.run().context("Error executing Tables command")?;
        }
    }

    Ok(())
}
