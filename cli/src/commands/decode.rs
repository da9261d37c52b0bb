use anyhow::{Context, Result};
use colored::Colorize;
use probes_decoder::{
    arm::{arm_actions, arm_decode_insn, simulator_name, ArmAction},
    ArmReturn, InsnVerdict, ProbeAction, ProbeInsn,
};
use serde::Serialize;

use crate::{
    commands::{condition_name, out_of_line, OUT_OF_LINE},
    parse_word, PROBE_DECODE_VERSION_MESSAGE,
};

/// Decodes ARM instruction words against the built-in tables
#[derive(clap::Args)]
#[command(
    about = "Decode ARM instruction words",
    long_about = None,
    version = PROBE_DECODE_VERSION_MESSAGE
)]
#[command(propagate_version = true)]
pub struct DecodeCmd {
    /// Instruction words in hex, with or without a 0x prefix
    #[clap(required = true, value_parser = parse_word)]
    pub words: Vec<u32>,

    /// Return instruction appended to emulation slots (mov-pc-lr or bx-lr)
    #[clap(long, default_value_t = ArmReturn::MovPcLr, env = "PROBE_DECODE_ARM_RETURN")]
    pub arm_return: ArmReturn,

    /// Print the reports as JSON
    #[clap(long, env = "PROBE_DECODE_JSON")]
    pub json: bool,
}

/// Outcome of decoding one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub insn: String,
    pub condition: &'static str,
    pub verdict: InsnVerdict,
    /// Simulator name, or `out-of-line` for emulated instructions
    pub handler: Option<&'static str>,
    /// Slot words for emulated instructions
    pub slot: Option<Vec<String>>,
}

pub fn decode_word(insn: u32, arm_return: ArmReturn, actions: &[ProbeAction]) -> DecodeReport {
    let mut asi = ProbeInsn::new(arm_return);
    let verdict = arm_decode_insn(insn, &mut asi, actions);

    let handler = asi
        .action
        .and_then(ArmAction::from_idx)
        .map(|action| simulator_name(action).unwrap_or(OUT_OF_LINE));
    let slot = (verdict == InsnVerdict::Good)
        .then(|| asi.slot.words().iter().map(|w| format!("{w:#010x}")).collect());

    DecodeReport {
        insn: format!("{insn:#010x}"),
        condition: condition_name(insn),
        verdict,
        handler,
        slot,
    }
}

impl DecodeCmd {
    pub fn run(&self) -> Result<()> {
        let actions = arm_actions(out_of_line);
        let reports: Vec<DecodeReport> =
            self.words.iter().map(|&insn| decode_word(insn, self.arm_return, &actions)).collect();

        tracing::debug!("Decoded {} words with {} return", reports.len(), self.arm_return);

        if self.json {
            let json =
                serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
            println!("{json}");
            return Ok(());
        }

        println!("{} Decode", format!("{: >12}", "Command").bright_green().bold());
        println!();

        for report in &reports {
            let verdict = match report.verdict {
                InsnVerdict::Good => report.verdict.to_string().green().bold(),
                InsnVerdict::GoodNoSlot => report.verdict.to_string().cyan().bold(),
                InsnVerdict::Rejected => report.verdict.to_string().red().bold(),
            };
            let insn = report.insn.bright_green().bold();
            println!("{: >12} {} [{}]", insn, verdict, report.condition);

            if let Some(handler) = report.handler {
                println!("{: >12} {}", "Handler".bright_green(), handler);
            }
            if let Some(slot) = &report.slot {
                println!("{: >12} {}", "Slot".bright_green(), slot.join(" "));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probes_decoder::ARM_BX_LR;

    #[test]
    fn test_decode_word_reports() {
        let actions = arm_actions(out_of_line);

        let report = decode_word(0xeb00_0000, ArmReturn::MovPcLr, &actions);
        assert_eq!(report.verdict, InsnVerdict::GoodNoSlot);
        assert_eq!(report.handler, Some("simulate_bbl"));
        assert_eq!(report.slot, None);
        assert_eq!(report.condition, "al");

        let report = decode_word(0x1081_0002, ArmReturn::BxLr, &actions);
        assert_eq!(report.verdict, InsnVerdict::Good);
        assert_eq!(report.handler, Some(OUT_OF_LINE));
        assert_eq!(report.condition, "ne");
        assert_eq!(
            report.slot,
            Some(vec!["0xe0820003".to_string(), format!("{ARM_BX_LR:#010x}")])
        );

        let report = decode_word(0xef00_0000, ArmReturn::MovPcLr, &actions);
        assert_eq!(report.verdict, InsnVerdict::Rejected);
        assert_eq!(report.handler, None);

        // push {r4, lr} runs from a block-transfer slot
        let report = decode_word(0xe92d_4010, ArmReturn::MovPcLr, &actions);
        assert_eq!(report.verdict, InsnVerdict::Good);
        assert_eq!(report.handler, Some(OUT_OF_LINE));
    }

    #[test]
    fn test_report_json() {
        let actions = arm_actions(out_of_line);
        let report = decode_word(0xf5d0_f000, ArmReturn::MovPcLr, &actions);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "good-no-slot");
        assert_eq!(json["handler"], "simulate_nop");
        assert_eq!(json["condition"], "unconditional");
        assert!(json["slot"].is_null());
    }
}
