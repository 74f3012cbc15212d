// Plain-text rendering of session state

use std::io::Write;

use crate::constants::{TARGET_TOTAL_WEIGHT, WEIGHT_MAX};
use crate::error::Result;
use crate::factors::FACTORS;
use crate::ideas::VideoIdea;
use crate::scoring::{classify, ScoreBreakdown};
use crate::session::RankingView;
use crate::weights::{Preset, WeightConfig};

/// Ranked ideas with score and urgency, plus the weight advisory
pub fn ranking(out: &mut impl Write, view: &RankingView<'_>) -> Result<()> {
    writeln!(out, "Video Content Ideas ({})", view.idea_count)?;

    if view.entries.is_empty() {
        writeln!(out, "No ideas yet. Use 'add [title]' to create one.")?;
    } else {
        writeln!(
            out,
            "{:>4}  {:>6}  {:<6}  {:<17}  {:>14}  {}",
            "Rank", "Score", "Tier", "Urgency", "ID", "Title"
        )?;
        for entry in &view.entries {
            writeln!(
                out,
                "{:>4}  {:>6}  {:<6}  {:<17}  {:>14}  {}",
                format!("#{}", entry.position),
                entry.score.to_string(),
                entry.tier.label(),
                entry.urgency.label,
                entry.idea.id.to_string(),
                entry.idea.title
            )?;
        }
    }

    total_line(out, view.total_weight)?;
    if let Some(advisory) = view.weight_advisory() {
        writeln!(out, "{}", advisory)?;
    }
    Ok(())
}

/// Ideas in insertion order with every rating
pub fn ideas(out: &mut impl Write, ideas: &[VideoIdea]) -> Result<()> {
    if ideas.is_empty() {
        writeln!(out, "No ideas yet.")?;
        return Ok(());
    }

    for idea in ideas {
        writeln!(out, "[{}] {}", idea.id, idea.title)?;
        for def in &FACTORS {
            writeln!(out, "    {} {:<24} {:>2}/10", def.icon, def.label, idea.rating(def.factor))?;
        }
    }
    Ok(())
}

pub fn weights(out: &mut impl Write, weights: &WeightConfig) -> Result<()> {
    for def in &FACTORS {
        writeln!(
            out,
            "  {} {:<24} {:>2}% (max {})",
            def.icon,
            def.label,
            weights.get(def.factor),
            WEIGHT_MAX
        )?;
    }
    total_line(out, weights.total_weight())
}

pub fn factors(out: &mut impl Write) -> Result<()> {
    for def in &FACTORS {
        writeln!(out, "{} {:<24} ({})", def.icon, def.label, def.key)?;
        writeln!(out, "    {}", def.description)?;
    }
    Ok(())
}

pub fn presets(out: &mut impl Write) -> Result<()> {
    for preset in Preset::ALL {
        let values: Vec<String> = preset.weights().values().iter().map(u8::to_string).collect();
        writeln!(
            out,
            "{} {:<22} {:<9} [{}]",
            preset.icon(),
            preset.label(),
            preset.name(),
            values.join(", ")
        )?;
    }
    Ok(())
}

/// Per-factor contributions of one idea
pub fn breakdown(out: &mut impl Write, idea: &VideoIdea, breakdown: &ScoreBreakdown) -> Result<()> {
    writeln!(
        out,
        "[{}] {}  score {} ({})",
        idea.id,
        idea.title,
        breakdown.total,
        breakdown.total.tier().label()
    )?;
    for c in &breakdown.contributions {
        let def = c.factor.definition();
        writeln!(
            out,
            "    {} {:<24} {:>2} x {:>2}% = {:>5}",
            def.icon,
            def.label,
            c.rating,
            c.weight,
            c.contribution.to_string()
        )?;
    }
    if let Some(top) = breakdown.strongest() {
        writeln!(out, "Strongest factor: {}", top.factor.label())?;
    }
    writeln!(out, "Urgency: {}", classify(idea).label)?;
    Ok(())
}

fn total_line(out: &mut impl Write, total: u32) -> Result<()> {
    if total == TARGET_TOTAL_WEIGHT {
        writeln!(out, "Factor Weights (Total: {}%) ✓ Balanced", total)?;
    } else {
        writeln!(out, "Factor Weights (Total: {}%) ⚠ should total {}%", total, TARGET_TOTAL_WEIGHT)?;
    }
    Ok(())
}
