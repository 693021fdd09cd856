use anyhow::{anyhow, Result};

/// Largest number of fractional digits whose scale still fits an `i128`.
pub const MAX_DECIMALS: u32 = 38;

/// Renders a fixed-point integer with `decimals` digits after the point,
/// trimming trailing zeros.
pub fn format_amount(amount: i128, decimals: u32) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let divisor = 10_i128.pow(decimals);
    let sign = if amount < 0 { "-" } else { "" };
    let whole = (amount / divisor).unsigned_abs();
    let fractional = (amount % divisor).unsigned_abs();

    if fractional == 0 {
        return format!("{sign}{whole}");
    }
    let digits = format!("{:0width$}", fractional, width = decimals as usize);
    format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
}

/// Parses a decimal string into a fixed-point integer with `decimals` digits.
pub fn parse_amount(amount_str: &str, decimals: u32) -> Result<i128> {
    let amount_str = amount_str.trim();
    let (negative, digits) = match amount_str.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount_str),
    };
    let (whole_str, fractional_str) = match digits.split_once('.') {
        Some((whole, fractional)) => (whole, fractional),
        None => (digits, ""),
    };
    if whole_str.is_empty() && fractional_str.is_empty() {
        return Err(anyhow!("Empty amount"));
    }
    if fractional_str.len() > decimals as usize {
        return Err(anyhow!("Too many decimal places"));
    }

    let scale = 10_i128.pow(decimals);
    let whole: i128 = if whole_str.is_empty() { 0 } else { whole_str.parse()? };
    let fractional: i128 = if fractional_str.is_empty() {
        0
    } else {
        fractional_str.parse::<i128>()? * 10_i128.pow(decimals - fractional_str.len() as u32)
    };

    let value = whole
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(fractional))
        .ok_or_else(|| anyhow!("Amount out of range"))?;
    Ok(if negative { -value } else { value })
}

pub fn format_duration(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    match (days, hours, minutes) {
        (0, 0, 0) => format!("{}s", seconds),
        (0, 0, m) => format!("{}m", m),
        (0, h, m) => format!("{}h {}m", h, m),
        (d, h, _) => format!("{}d {}h", d, h),
    }
}

/// Checks the shape of a Stellar account (`G...`) or contract (`C...`) address.
pub fn validate_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(anyhow!("Address cannot be empty"));
    }
    if !(address.starts_with('G') || address.starts_with('C')) {
        return Err(anyhow!("Address must start with G or C"));
    }
    if address.len() != 56 {
        return Err(anyhow!("Address must be 56 characters long"));
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c))
    {
        return Err(anyhow!("Address must be base32 (A-Z, 2-7)"));
    }
    Ok(())
}

pub fn truncate_address(address: &str, chars: usize) -> String {
    if address.len() <= chars * 2 {
        return address.to_string();
    }
    format!("{}...{}", &address[..chars], &address[address.len() - chars..])
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", cells.join(mid))
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "No data to display".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut table = border(&widths, "┌", "┬", "┐");
    table.push_str(&line(&header, &widths));
    table.push_str(&border(&widths, "├", "┼", "┤"));
    for row in rows {
        table.push_str(&line(row, &widths));
    }
    table.push_str(border(&widths, "└", "┴", "┘").trim_end());
    table
}
