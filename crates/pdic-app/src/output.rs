use std::io::{self, Write};
use std::str::FromStr;

use encoding_rs::{EncoderResult, Encoding, UTF_8};
use pdic_core::LineSink;

/// Line terminator written after every output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    /// The platform's native terminator
    Platform,
    Cr,
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Newline::Platform if cfg!(windows) => "\r\n",
            Newline::Platform => "\n",
            Newline::Cr => "\r",
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

impl FromStr for Newline {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Newline::Platform),
            "cr" => Ok(Newline::Cr),
            "lf" => Ok(Newline::Lf),
            "crlf" => Ok(Newline::CrLf),
            other => anyhow::bail!("Unknown newline '{other}', expected none, cr, lf or crlf"),
        }
    }
}

/// What to do with characters the output encoding cannot represent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Fail the write
    Strict,
    /// Drop the character
    Ignore,
    /// Write `?`
    Replace,
    /// Write an XML character reference `&#NNN;`
    XmlCharRef,
    /// Write `\xNN`, `\uNNNN` or `\UNNNNNNNN`
    Backslash,
}

impl FromStr for ErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ErrorPolicy::Strict),
            "ignore" => Ok(ErrorPolicy::Ignore),
            "replace" => Ok(ErrorPolicy::Replace),
            "xmlcharrefreplace" => Ok(ErrorPolicy::XmlCharRef),
            "backslashreplace" => Ok(ErrorPolicy::Backslash),
            other => anyhow::bail!("Unknown output error method '{other}'"),
        }
    }
}

fn backslash_escape(c: char) -> String {
    match c as u32 {
        n @ 0..=0xff => format!("\\x{n:02x}"),
        n @ 0x100..=0xffff => format!("\\u{n:04x}"),
        n => format!("\\U{n:08x}"),
    }
}

/// Writes lookup output in the chosen encoding and line terminator
pub struct OutputSink<W: Write> {
    writer: W,
    encoding: &'static Encoding,
    errors: ErrorPolicy,
    newline: Newline,
    /// Flush after every line, for interactive use
    autoflush: bool,
}

impl<W: Write> OutputSink<W> {
    /// Fails for unknown labels and for encodings that cannot be written,
    /// such as UTF-16
    pub fn new(writer: W, label: &str, errors: ErrorPolicy, newline: Newline) -> anyhow::Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| anyhow::anyhow!("Unknown output encoding '{label}'"))?;
        if encoding.output_encoding() != encoding {
            anyhow::bail!("Unsupported output encoding '{label}'");
        }

        Ok(Self {
            writer,
            encoding,
            errors,
            newline,
            autoflush: false,
        })
    }

    pub fn autoflush(mut self, autoflush: bool) -> Self {
        self.autoflush = autoflush;
        self
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn encode(&self, text: &str) -> io::Result<Vec<u8>> {
        if self.encoding == UTF_8 {
            return Ok(text.as_bytes().to_vec());
        }

        let mut encoder = self.encoding.new_encoder();
        let mut out = Vec::with_capacity(text.len() + 8);
        let mut src = text;

        loop {
            let capacity = encoder
                .max_buffer_length_from_utf8_without_replacement(src.len())
                .unwrap_or(src.len() * 4 + 16);
            let mut buf = vec![0u8; capacity];
            let (result, read, written) =
                encoder.encode_from_utf8_without_replacement(src, &mut buf, true);
            out.extend_from_slice(&buf[..written]);
            src = &src[read..];

            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::OutputFull => continue,
                EncoderResult::Unmappable(c) => match self.errors {
                    ErrorPolicy::Strict => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("'{c}' cannot be encoded in {}", self.encoding.name()),
                        ));
                    }
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => out.push(b'?'),
                    ErrorPolicy::XmlCharRef => {
                        out.extend_from_slice(format!("&#{};", c as u32).as_bytes())
                    }
                    ErrorPolicy::Backslash => out.extend_from_slice(backslash_escape(c).as_bytes()),
                },
            }
        }
    }
}

impl<W: Write> LineSink for OutputSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let bytes = self.encode(line)?;
        self.writer.write_all(&bytes)?;
        self.writer.write_all(self.newline.as_str().as_bytes())?;
        if self.autoflush {
            self.writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(label: &str, errors: ErrorPolicy, newline: Newline, lines: &[&str]) -> io::Result<Vec<u8>> {
        let mut sink = OutputSink::new(Vec::new(), label, errors, newline).unwrap();
        for line in lines {
            sink.write_line(line)?;
        }
        Ok(sink.into_inner())
    }

    #[test]
    fn test_newlines() {
        let out = render("utf-8", ErrorPolicy::Strict, Newline::CrLf, &["a", "b"]).unwrap();
        assert_eq!(out, b"a\r\nb\r\n");
        let out = render("utf-8", ErrorPolicy::Strict, Newline::Cr, &["a"]).unwrap();
        assert_eq!(out, b"a\r");
        let out = render("utf-8", ErrorPolicy::Strict, Newline::Lf, &["ĉevalo"]).unwrap();
        assert_eq!(out, "ĉevalo\n".as_bytes());
    }

    #[test]
    fn test_parse_newline() {
        assert_eq!("none".parse::<Newline>().unwrap(), Newline::Platform);
        assert_eq!("CRLF".parse::<Newline>().unwrap(), Newline::CrLf);
        assert!("crcr".parse::<Newline>().is_err());
    }

    #[test]
    fn test_parse_error_policy() {
        assert_eq!("strict".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Strict);
        assert_eq!(
            "xmlcharrefreplace".parse::<ErrorPolicy>().unwrap(),
            ErrorPolicy::XmlCharRef
        );
        assert!("surrogate".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn test_legacy_encoding() {
        let out = render("latin1", ErrorPolicy::Strict, Newline::Lf, &["año"]).unwrap();
        assert_eq!(out, b"a\xf1o\n");
    }

    #[test]
    fn test_unmappable_policies() {
        let line = ["ĉevalo"];
        assert!(render("latin1", ErrorPolicy::Strict, Newline::Lf, &line).is_err());

        let out = render("latin1", ErrorPolicy::Ignore, Newline::Lf, &line).unwrap();
        assert_eq!(out, b"evalo\n");
        let out = render("latin1", ErrorPolicy::Replace, Newline::Lf, &line).unwrap();
        assert_eq!(out, b"?evalo\n");
        let out = render("latin1", ErrorPolicy::XmlCharRef, Newline::Lf, &line).unwrap();
        assert_eq!(out, b"&#265;evalo\n");
        let out = render("latin1", ErrorPolicy::Backslash, Newline::Lf, &line).unwrap();
        assert_eq!(out, b"\\u0109evalo\n");
    }

    #[test]
    fn test_unknown_encoding() {
        assert!(OutputSink::new(Vec::new(), "nope", ErrorPolicy::Strict, Newline::Lf).is_err());
    }

    #[test]
    fn test_unwritable_encoding_is_rejected() {
        for label in ["utf-16le", "UTF-16BE", "utf-16"] {
            assert!(
                OutputSink::new(Vec::new(), label, ErrorPolicy::Strict, Newline::Lf).is_err(),
                "{label} should be rejected"
            );
        }
    }
}
