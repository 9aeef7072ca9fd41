use crate::domain::ports::ClipboardSink;
use crate::utils::error::{Result, TidyError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

/// Native OS clipboard via arboard. Preferred tier.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(clipboard_err)?;
        clipboard.set_text(text.to_string()).map_err(clipboard_err)?;
        Ok(())
    }
}

fn clipboard_err(e: arboard::Error) -> TidyError {
    TidyError::ClipboardError {
        message: e.to_string(),
    }
}

/// OSC 52 escape sequence; reaches the local clipboard through terminals
/// that support it, including over SSH.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", payload)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Last resort: print the snippet so the user can select and copy it.
pub struct StdoutFallback;

impl ClipboardSink for StdoutFallback {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

/// 降級順序：系統剪貼板 → OSC 52 → 標準輸出
pub fn default_chain() -> Vec<Box<dyn ClipboardSink>> {
    vec![
        Box::new(SystemClipboard),
        Box::new(Osc52Clipboard::stdout()),
        Box::new(StdoutFallback),
    ]
}

/// Try each sink in order; returns the name of the tier that took the text.
pub fn copy_with_fallback(text: &str, sinks: &mut [Box<dyn ClipboardSink>]) -> Result<&'static str> {
    let mut last_message = "no clipboard sink configured".to_string();

    for sink in sinks.iter_mut() {
        let name = sink.name();
        match sink.write(text) {
            Ok(()) => return Ok(name),
            Err(e) => {
                tracing::warn!(sink = name, error = %e, "Clipboard sink failed, falling back");
                last_message = e.to_string();
            }
        }
    }

    Err(TidyError::ClipboardError {
        message: last_message,
    })
}
