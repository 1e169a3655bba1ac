//! Digital rain layout
//!
//! Columns of falling glyphs behind everything else. Randomness comes from the
//! caller so the browser can use `Math.random` and tests can use a fixed sequence.

const GLYPHS: &[char] = &[
    '0', '1', 'ア', 'カ', 'サ', 'タ', 'ナ', 'ハ', 'マ', 'ヤ', 'ラ', 'ワ', 'E', 'L', 'I', 'C', 'T',
    '$', '#', '%', '<', '>', '/',
];

#[derive(Debug, Clone, PartialEq)]
pub struct RainColumn {
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub glyphs: String,
}

impl RainColumn {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.delay_s, self.duration_s
        )
    }
}

/// Build `count` columns of `rows` glyphs. `rng` must yield values in `[0, 1)`.
pub fn rain_columns(count: usize, rows: usize, mut rng: impl FnMut() -> f64) -> Vec<RainColumn> {
    let width = if count == 0 { 0.0 } else { 100.0 / count as f64 };
    (0..count)
        .map(|i| {
            let jitter = rng() * width * 0.5;
            let delay_s = rng() * 5.0;
            let duration_s = 4.0 + rng() * 6.0;
            let glyphs = (0..rows)
                .map(|_| {
                    let idx = (rng() * GLYPHS.len() as f64) as usize;
                    GLYPHS[idx.min(GLYPHS.len() - 1)]
                })
                .collect();
            RainColumn {
                left_pct: i as f64 * width + jitter,
                delay_s,
                duration_s,
                glyphs,
            }
        })
        .collect()
}
