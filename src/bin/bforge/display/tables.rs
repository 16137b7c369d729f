use std::io::{self, Write};

use bead_forge::{ChainTopology, RebuildConfig, ResidueMode};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// Totals of one `convert` or `check` run.
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub frames_read: usize,
    pub frames_rebuilt: usize,
    pub records: usize,
    pub warnings: usize,
    pub destination: Option<String>,
}

pub fn print_topology(topology: &ChainTopology, config: &RebuildConfig) {
    let mode = match config.mode {
        ResidueMode::Protein => "protein",
        ResidueMode::ProteinDna => "protein + DNA",
    };

    let mut rows = vec![
        ("Residue Model", mode.to_string()),
        (
            "Protein Chains",
            format!(
                "{} ({} residues)",
                topology.protein_chain_count(),
                topology.protein_residues()
            ),
        ),
    ];
    if config.mode.includes_dna() {
        rows.push((
            "DNA Strands",
            format!(
                "{} ({} nucleotides)",
                topology.dna_chain_count(),
                topology.dna_residues()
            ),
        ));
    }
    rows.push((
        "Beads per Frame",
        config.expected_atom_count(topology).to_string(),
    ));
    rows.push((
        "Terminal Atoms",
        if config.terminal_atoms { "exact" } else { "affine" }.to_string(),
    ));

    let mut out = io::stderr().lock();
    print_kv_table(&mut out, "Topology", &rows);
}

pub fn print_chain_breakdown(topology: &ChainTopology) {
    let chain_w = 5usize;
    let kind_w = 7usize;
    let residues_w = 8usize;
    let sep_overhead = 9;
    let seq_w = SAFE_TABLE_WIDTH.saturating_sub(chain_w + kind_w + residues_w + sep_overhead);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(chain_w + 2),
            "─".repeat(kind_w + 2),
            "─".repeat(residues_w + 2),
            "─".repeat(seq_w + 2),
        )
    };

    let mut out = io::stderr().lock();

    let _ = writeln!(out, "{INDENT}┌─ Chain Breakdown ─┐");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<chain_w$} │ {:<kind_w$} │ {:>residues_w$} │ {:<seq_w$} │",
        "Chain", "Type", "Residues", "Sequence",
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for chain in topology.chains() {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<chain_w$} │ {:<kind_w$} │ {:>residues_w$} │ {:<seq_w$} │",
            chain.id,
            chain.kind.to_string(),
            chain.len(),
            truncate(&chain.sequence(), seq_w),
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

pub fn print_conversion_summary(summary: &ConversionSummary) {
    let mut rows = vec![
        ("Frames Read", summary.frames_read.to_string()),
        ("Frames Rebuilt", summary.frames_rebuilt.to_string()),
        ("PDB Records", summary.records.to_string()),
        ("Clamped Carbonyls", summary.warnings.to_string()),
    ];
    if let Some(destination) = &summary.destination {
        rows.push(("Output", destination.clone()));
    }

    let mut out = io::stderr().lock();
    print_kv_table(&mut out, "Conversion Summary", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 17usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{INDENT}├{k_line}┼{v_line}┤");

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}
