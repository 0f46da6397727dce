//! Plain-text tables for catalog and leaderboard output.

use benchboard_core::RankingRow;
use benchboard_core::controller::AssetView;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Widest display width among `values` and the header, in terminal cells.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .chain([header.width()])
        .max()
        .unwrap_or(0)
}

/// Left-align `text` in a column `width` cells wide.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Render the asset picker: one line per asset, `*` marking selected ones.
pub fn catalog_table(assets: &[AssetView]) -> String {
    let id_w = column_width("ID", assets.iter().map(|a| a.id.as_str()));
    let name_w = column_width("NAME", assets.iter().map(|a| a.name.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "    {}  {}  TAGS", pad("ID", id_w), pad("NAME", name_w));
    for asset in assets {
        let mark = if asset.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] {}  {}  {}",
            pad(&asset.id, id_w),
            pad(&asset.name, name_w),
            asset.tag_summary
        );
    }
    let selected = assets.iter().filter(|a| a.selected).count();
    let _ = writeln!(out, "{selected} of {} selected", assets.len());
    out
}

/// Render a leaderboard, top model first.
pub fn leaderboard_table(rows: &[RankingRow]) -> String {
    let model_w = column_width("MODEL", rows.iter().map(|r| r.model.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "RANK  {}  SCORE  ACCURACY  LATENCY  COST",
        pad("MODEL", model_w)
    );
    for row in rows {
        let rank = if row.top {
            format!("{}*", row.rank)
        } else {
            row.rank.to_string()
        };
        let _ = writeln!(
            out,
            "{rank:<4}  {}  {:.2}   {:>7.1}%  {:>7}  {}",
            pad(&row.model, model_w),
            row.score,
            row.accuracy * 100.0,
            row.latency,
            row.cost
        );
    }
    out
}
