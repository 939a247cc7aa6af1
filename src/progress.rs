use std::io::Write;

const BAR_WIDTH: usize = 50;

/// Render one progress line: `[██▒░░...] 40% (2/5) Some Title`.
/// `total` must be nonzero; callers skip reporting for empty batches.
pub fn render(current: usize, total: usize, label: &str) -> String {
    let fraction = current as f64 / total as f64;
    let filled = (BAR_WIDTH as f64 * fraction) as usize;

    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for cell in 0..BAR_WIDTH {
        if cell < filled {
            bar.push('█');
        } else if cell == filled {
            bar.push('▒');
        } else {
            bar.push('░');
        }
    }

    format!(
        "[{}] {:>3}% ({}/{}) {}",
        bar,
        (fraction * 100.0).round() as usize,
        current,
        total,
        label
    )
}

/// Redraw the progress line in place.
pub fn report(current: usize, total: usize, label: &str) {
    print!("\r{}", render(current, total, label));
    let _ = std::io::stdout().flush();
}
