//! Physical line reader for properties text.
//!
//! Line terminators are the reader's concern: `\n`, `\r\n`, and a bare `\r`
//! all end a line, and none of them reach the parser.

/// Iterator over `(line_number, line)` pairs with 1-based line numbers.
#[derive(Clone, Debug)]
pub struct LineReader<'a> {
    remaining: Option<&'a str>,
    line: usize,
}

impl<'a> LineReader<'a> {
    /// Create a reader over `text`. Empty input yields no lines.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            remaining: (!text.is_empty()).then_some(text),
            line: 0,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remaining?;
        self.line += 1;

        match text.find(['\n', '\r']) {
            Some(index) => {
                let (line, rest) = text.split_at(index);
                let rest = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .or_else(|| rest.strip_prefix('\r'))
                    .unwrap_or(rest);
                self.remaining = (!rest.is_empty()).then_some(rest);
                Some((self.line, line))
            }
            None => {
                self.remaining = None;
                Some((self.line, text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(text: &str) -> Vec<&str> {
        LineReader::new(text).map(|(_, line)| line).collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("one", vec!["one"])]
    #[case("one\n", vec!["one"])]
    #[case("one\ntwo", vec!["one", "two"])]
    #[case("one\r\ntwo\r\n", vec!["one", "two"])]
    #[case("one\rtwo", vec!["one", "two"])]
    #[case("one\n\nthree", vec!["one", "", "three"])]
    #[case("one\r\n\r\nthree", vec!["one", "", "three"])]
    fn normalises_line_terminators(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(lines(text), expected);
    }

    #[test]
    fn numbers_lines_from_one() {
        let numbers: Vec<usize> = LineReader::new("a\nb\r\nc")
            .map(|(number, _)| number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
