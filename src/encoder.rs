use crate::errors::{EncodeError, EncodeResult};

/// The eight characters the machine understands; everything else in a
/// source file is a comment.
pub const OPERATORS: [char; 8] = ['>', '<', '+', '-', '.', ',', '[', ']'];

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Frame the filtered program as `[len + 1, codes.., 0]`. The leading
/// word counts the remaining elements (the terminating 0 included);
/// the machine stops at the 0.
pub fn encode_program(source: &str) -> Vec<i64> {
    let codes: Vec<i64> = source
        .chars()
        .filter(|c| is_operator(*c))
        .map(|c| c as i64)
        .collect();
    let mut encoded = Vec::with_capacity(codes.len() + 2);
    encoded.push(codes.len() as i64 + 1);
    encoded.extend(codes);
    encoded.push(0);
    encoded
}

/// Parse a comma separated integer stream. A leading/trailing run of
/// newlines is stripped; spaces around individual values are
/// tolerated.
pub fn parse_input_values(text: &str) -> EncodeResult<Vec<i64>> {
    text.trim_matches('\n')
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|source| EncodeError::BadInputValue {
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Frame the input stream as `[len, values..]`.
pub fn encode_inputs(values: &[i64]) -> Vec<i64> {
    let mut encoded = Vec::with_capacity(values.len() + 1);
    encoded.push(values.len() as i64);
    encoded.extend_from_slice(values);
    encoded
}

/// Full machine image: program array followed by input array.
pub fn encode(source: &str, input_values: &[i64]) -> Vec<i64> {
    let mut image = encode_program(source);
    image.extend(encode_inputs(input_values));
    image
}

/// One line, comma separated, no spaces.
pub fn to_line(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
