/// Sentinel shown for Box codes without a known material grade.
pub const UNAVAILABLE: &str = "Descrição não disponível";

/// Material grade behind each machine output bin (codes 1–13).
pub fn description(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "2200 M",
        2 => "metal",
        3 => "2200 G",
        4 => "2200 F",
        5 => "2500 M",
        6 => "2500 F",
        7 => "2500 G",
        8 => "2650",
        9 => "2800 G",
        10 => "2800 F/M",
        11 => "3100 G",
        12 => "3100 F/M",
        13 => "Outros",
        _ => return None,
    })
}

/// Description with the sentinel substituted for unmapped codes.
pub fn label(code: i64) -> &'static str {
    description(code).unwrap_or(UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_codes_have_grades() {
        assert_eq!(description(1), Some("2200 M"));
        assert_eq!(description(3), Some("2200 G"));
        assert_eq!(description(5), Some("2500 M"));
        assert_eq!(description(13), Some("Outros"));
    }

    #[test]
    fn unmapped_codes_fall_back_to_the_sentinel() {
        assert_eq!(description(0), None);
        assert_eq!(description(14), None);
        assert_eq!(label(99), UNAVAILABLE);
        assert_eq!(label(-1), UNAVAILABLE);
    }
}
