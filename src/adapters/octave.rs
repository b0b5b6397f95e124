//! GNU Octave session adapter.
//!
//! ## Purpose
//!
//! This module drives a long-lived `octave-cli` process over its standard
//! streams and exposes it as a [`FilterOracle`]: `fir1` for FIR design and
//! `sgolayfilt` for smoothing, both from Octave's `signal` package.
//!
//! ## Design notes
//!
//! * **Framing**: Every request is wrapped in `try ... end_try_catch`, followed
//!   by a unique sentinel line. The reader collects stdout up to the sentinel;
//!   a line carrying the error marker turns into [`ParityError::Bridge`].
//! * **Values**: Arguments are rendered as Octave literals. Numbers use the
//!   shortest round-trip representation; results are printed with `%.17g`,
//!   so values survive the trip bit-for-bit.
//! * **Orientation**: One-dimensional arguments are sent as row vectors or
//!   column vectors according to [`SessionOptions::oned_as`].
//! * **Lifecycle**: [`OctaveSession::close`] asks Octave to exit and reaps it.
//!   A session dropped without `close` is killed and reaped.
//!
//! ## Key concepts
//!
//! * **Setup**: Spawning the process and `pkg load signal` are setup steps;
//!   failures there are [`ParityError::Setup`] and abort the reference path.
//!
//! ## Invariants
//!
//! * Requests are strictly sequential; one request is in flight at a time.
//! * After `close` the session rejects further requests.
//!
//! ## Non-goals
//!
//! * No retries, timeouts, or reconnection.
//! * Only numeric results are decoded.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use tracing::{debug, info, warn};

use crate::adapters::FilterOracle;
use crate::math::window::Window;
use crate::primitives::errors::ParityError;
use crate::primitives::spec::{FilterKind, FilterSpec, SmoothingSpec};

const ERROR_MARKER: &str = "__filter_parity_error__ ";
const RESULT_VAR: &str = "__filter_parity_result__";

// ============================================================================
// Session Options
// ============================================================================

/// Shape given to one-dimensional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// `[a, b, c]`
    #[default]
    Row,

    /// `[a; b; c]`
    Column,
}

/// Options for spawning an Octave session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Executable to run.
    pub program: String,

    /// Command-line arguments.
    pub args: Vec<String>,

    /// Orientation of one-dimensional arguments.
    pub oned_as: Orientation,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            program: "octave-cli".to_string(),
            args: ["--quiet", "--norc", "--no-history", "--no-line-editing"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            oned_as: Orientation::Row,
        }
    }
}

impl SessionOptions {
    /// Use a different executable.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the command-line arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the orientation of one-dimensional arguments.
    pub fn oned_as(mut self, orientation: Orientation) -> Self {
        self.oned_as = orientation;
        self
    }
}

// ============================================================================
// Values
// ============================================================================

/// Positional argument for [`OctaveSession::call`].
#[derive(Debug, Clone, PartialEq)]
pub enum OctaveValue {
    /// Real scalar.
    Scalar(f64),

    /// One-dimensional real array, shaped by the session orientation.
    Vector(Vec<f64>),

    /// Character string.
    Str(String),

    /// Octave expression inserted verbatim, e.g. `hann(8)`.
    Expr(String),
}

impl OctaveValue {
    /// Render as an Octave literal.
    pub fn render(&self, oned_as: Orientation) -> String {
        match self {
            OctaveValue::Scalar(v) => render_number(*v),
            OctaveValue::Vector(values) => {
                let sep = match oned_as {
                    Orientation::Row => ", ",
                    Orientation::Column => "; ",
                };
                let body: Vec<String> = values.iter().map(|&v| render_number(v)).collect();
                format!("[{}]", body.join(sep))
            }
            OctaveValue::Str(s) => format!("'{}'", s.replace('\'', "''")),
            OctaveValue::Expr(e) => e.clone(),
        }
    }
}

fn render_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let token = if v > 0.0 { "Inf" } else { "-Inf" };
        token.to_string()
    } else {
        format!("{:?}", v)
    }
}

fn parse_number(token: &str) -> Result<f64, ParityError> {
    match token {
        "NaN" | "-NaN" => Ok(f64::NAN),
        "Inf" => Ok(f64::INFINITY),
        "-Inf" => Ok(f64::NEG_INFINITY),
        _ => token
            .parse::<f64>()
            .map_err(|e| ParityError::Bridge(format!("unparsable value '{}': {}", token, e))),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// Session
// ============================================================================

/// A running Octave interpreter.
#[derive(Debug)]
pub struct OctaveSession {
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stdout: Option<BufReader<ChildStdout>>,
    oned_as: Orientation,
    requests: u64,
}

impl OctaveSession {
    /// Spawn Octave and wait until it answers a first request.
    pub fn open(options: &SessionOptions) -> Result<Self, ParityError> {
        debug!(program = %options.program, args = ?options.args, "spawning octave session");

        let mut child = Command::new(&options.program)
            .args(&options.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ParityError::Setup {
                stage: "spawn".to_string(),
                detail: format!("failed to spawn `{}`: {}", options.program, e),
            })?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().map(BufReader::new);

        let mut session = Self {
            child: Some(child),
            stdin,
            stdout,
            oned_as: options.oned_as,
            requests: 0,
        };

        session
            .eval("more off; page_screen_output(false);")
            .map_err(|e| ParityError::Setup {
                stage: "handshake".to_string(),
                detail: e.to_string(),
            })?;

        debug!("octave session ready");
        Ok(session)
    }

    /// Orientation applied to one-dimensional arguments.
    pub fn oned_as(&self) -> Orientation {
        self.oned_as
    }

    /// Whether the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.child.is_none()
    }

    /// Evaluate a raw statement, returning any lines it printed.
    pub fn eval(&mut self, statement: &str) -> Result<Vec<String>, ParityError> {
        self.requests += 1;
        let sentinel = format!("__filter_parity_done_{}__", self.requests);
        let request = format!(
            "try\n{}\ncatch err\nprintf(\"{}%s\\n\", strrep(err.message, \"\\n\", \" \"));\nend_try_catch\nprintf(\"\\n{}\\n\");\nfflush(stdout);\n",
            statement, ERROR_MARKER, sentinel
        );

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| ParityError::Bridge("session is closed".to_string()))?;
        stdin
            .write_all(request.as_bytes())
            .map_err(|e| ParityError::Bridge(format!("failed to write request: {}", e)))?;
        stdin
            .flush()
            .map_err(|e| ParityError::Bridge(format!("failed to write request: {}", e)))?;

        let stdout = self
            .stdout
            .as_mut()
            .ok_or_else(|| ParityError::Bridge("session is closed".to_string()))?;

        let mut lines = Vec::new();
        let mut failure = None;
        loop {
            let mut line = String::new();
            let read = stdout
                .read_line(&mut line)
                .map_err(|e| ParityError::Bridge(format!("failed to read response: {}", e)))?;
            if read == 0 {
                return Err(ParityError::Bridge(
                    "octave exited before completing the request".to_string(),
                ));
            }

            let line = line.trim_end_matches(['\r', '\n']);
            if line == sentinel {
                break;
            }
            if let Some(message) = line.strip_prefix(ERROR_MARKER) {
                failure = Some(message.to_string());
            } else if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        match failure {
            Some(message) => Err(ParityError::Bridge(message)),
            None => Ok(lines),
        }
    }

    /// Load an Octave package (`pkg load <name>`).
    pub fn load_package(&mut self, name: &str) -> Result<(), ParityError> {
        let stage = format!("pkg load {}", name);
        if !is_identifier(name) {
            return Err(ParityError::Setup {
                stage,
                detail: "invalid package name".to_string(),
            });
        }
        self.eval(&stage).map_err(|e| ParityError::Setup {
            stage: stage.clone(),
            detail: e.to_string(),
        })?;
        info!(package = name, "octave package loaded");
        Ok(())
    }

    /// Call `function` with positional arguments and return its first output,
    /// flattened in column-major order.
    pub fn call(&mut self, function: &str, args: &[OctaveValue]) -> Result<Vec<f64>, ParityError> {
        if !is_identifier(function) {
            return Err(ParityError::Bridge(format!(
                "invalid function name '{}'",
                function
            )));
        }

        let rendered: Vec<String> = args.iter().map(|a| a.render(self.oned_as)).collect();
        let statement = format!(
            "{var} = {func}({args});\nprintf(\"%.17g\\n\", {var}(:));\nclear {var};",
            var = RESULT_VAR,
            func = function,
            args = rendered.join(", ")
        );
        debug!(function, argc = args.len(), "octave call");

        self.eval(&statement)?
            .iter()
            .map(|line| parse_number(line.trim()))
            .collect()
    }

    /// Ask Octave to exit and wait for the process.
    pub fn close(&mut self) -> Result<(), ParityError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        if let Some(mut stdin) = self.stdin.take() {
            // The process may already be gone; the wait below reports that.
            let _ = stdin.write_all(b"exit\n");
            let _ = stdin.flush();
        }
        self.stdout = None;

        let status = child
            .wait()
            .map_err(|e| ParityError::Bridge(format!("failed waiting for octave exit: {}", e)))?;
        if status.success() {
            debug!("octave session closed");
        } else {
            warn!(%status, "octave exited with failure status");
        }
        Ok(())
    }
}

impl Drop for OctaveSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            self.stdin = None;
            let _ = child.kill();
            let _ = child.wait();
            debug!("octave session killed on drop");
        }
    }
}

// ============================================================================
// Oracle
// ============================================================================

/// [`FilterOracle`] backed by Octave's `signal` package.
#[derive(Debug)]
pub struct OctaveOracle {
    session: OctaveSession,
}

impl OctaveOracle {
    /// Open a session and load the `signal` package.
    pub fn open(options: &SessionOptions) -> Result<Self, ParityError> {
        let mut session = OctaveSession::open(options)?;
        session.load_package("signal")?;
        Ok(Self { session })
    }

    /// Underlying session.
    pub fn session(&mut self) -> &mut OctaveSession {
        &mut self.session
    }
}

impl FilterOracle for OctaveOracle {
    fn name(&self) -> &str {
        "octave"
    }

    /// `fir1(order, cutoff[, type[, window]])`.
    fn design_fir(&mut self, spec: &FilterSpec) -> Result<Vec<f64>, ParityError> {
        let mut args = vec![
            OctaveValue::Scalar(spec.order() as f64),
            OctaveValue::Scalar(spec.cutoff()),
        ];

        let kind = match spec.kind() {
            FilterKind::LowPass => "low",
            FilterKind::HighPass => "high",
        };
        if spec.window() != Window::Hamming {
            args.push(OctaveValue::Str(kind.to_string()));
            args.push(OctaveValue::Expr(format!(
                "{}({})",
                spec.window().octave_name(),
                spec.numtaps()
            )));
        } else if spec.kind() != FilterKind::LowPass {
            args.push(OctaveValue::Str(kind.to_string()));
        }

        self.session.call("fir1", &args)
    }

    /// `sgolayfilt(x, polyorder, window_length)`.
    fn smooth(&mut self, signal: &[f64], spec: &SmoothingSpec) -> Result<Vec<f64>, ParityError> {
        let args = [
            OctaveValue::Vector(signal.to_vec()),
            OctaveValue::Scalar(spec.polyorder() as f64),
            OctaveValue::Scalar(spec.window_length() as f64),
        ];
        self.session.call("sgolayfilt", &args)
    }

    fn close(&mut self) -> Result<(), ParityError> {
        self.session.close()
    }
}
