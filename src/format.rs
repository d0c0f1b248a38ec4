// Text formatting for the readout. Kept free of crate paths so host tests can include it.

#[inline]
pub fn format_volume(volume: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, volume)
}
