/// Formats a remaining-seconds count as zero-padded `mm:ss`.
pub fn format_mmss(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pads_both_fields() {
        assert_eq!(format_mmss(900), "15:00");
        assert_eq!(format_mmss(61), "01:01");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(0), "00:00");
    }
}
