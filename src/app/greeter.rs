use crate::core::Delegate;
use anyhow::Context;
use std::io::{self, Stdout, Write};

/// Template delegate: prints a greeting. Replace with real application logic.
pub struct Greeter<W: Write> {
    project_name: String,
    out: W,
}

impl Greeter<Stdout> {
    pub fn stdout(project_name: impl Into<String>) -> Self {
        Self::new(project_name, io::stdout())
    }
}

impl<W: Write> Greeter<W> {
    pub fn new(project_name: impl Into<String>, out: W) -> Self {
        Self {
            project_name: project_name.into(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Delegate for Greeter<W> {
    fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Hello from {}!", self.project_name)
            .and_then(|_| self.out.flush())
            .context("failed to write greeting")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greeting_text() {
        let mut greeter = Greeter::new("demo", Vec::new());
        greeter.run().unwrap();

        assert_eq!(
            String::from_utf8(greeter.into_inner()).unwrap(),
            "Hello from demo!\n"
        );
    }

    #[test]
    fn test_write_failure_is_delegate_failure() {
        let mut greeter = Greeter::new("demo", BrokenPipe);
        let err = greeter.run().unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("failed to write greeting"));
        assert!(message.contains("pipe closed"));
    }
}
