use crate::error::Result;

/// Split raw upload bytes into field tuples: one tuple per non-blank line,
/// fields separated by `~`, original line order preserved. No arity checks
/// happen here; that is the table builder's job.
pub fn parse(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let text = String::from_utf8(bytes.to_vec())?;
    let mut records = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(line.split('~').map(str::to_string).collect());
    }
    tracing::debug!(records = records.len(), "parsed upload");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DescascaError;

    #[test]
    fn one_tuple_per_non_blank_line_in_order() {
        let input = b"a~b~c\n\n  \nd~e~f\r\ng~h~i\n";
        let records = parse(input).unwrap();
        assert_eq!(
            records,
            vec![
                vec!["a", "b", "c"],
                vec!["d", "e", "f"],
                vec!["g", "h", "i"],
            ]
        );
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let records = parse(b"  1~2  \n").unwrap();
        assert_eq!(records, vec![vec!["1", "2"]]);
    }

    #[test]
    fn line_without_delimiter_is_a_single_field() {
        let records = parse(b"lone\n").unwrap();
        assert_eq!(records, vec![vec!["lone"]]);
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = parse(&[0xff, 0xfe, b'~', b'x']).unwrap_err();
        assert!(matches!(err, DescascaError::Decode(_)));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse(b"").unwrap().is_empty());
        assert!(parse(b"\n\n  \n").unwrap().is_empty());
    }
}
