/// Initial consonants and the nasal they turn into after a meN- prefix
const NASALIZATION: [(char, &str); 4] = [('k', "g"), ('p', "m"), ('s', "ny"), ('t', "n")];

/// Let a wildcard before a consonant also match its nasalized form.
///
/// `*kirim` becomes `*(k|g)irim`, so prefixed forms such as `mengirim`
/// are found as well.
pub fn normalize(s: &str) -> String {
    NASALIZATION.iter().fold(s.to_string(), |acc, (plain, nasal)| {
        acc.replace(&format!("*{plain}"), &format!("*({plain}|{nasal})"))
    })
}
