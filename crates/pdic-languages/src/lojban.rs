/// Lojban apostrophes are commonly typed as `h`
pub fn compose(s: &str) -> String {
    s.replace('h', "'")
}
