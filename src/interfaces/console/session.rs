use super::renderer;
use crate::application::checkout::{CheckoutEngine, Submission};
use crate::domain::form::{FormState, MSG_INVALID_PHONE};
use crate::domain::payment::PaymentMethod;
use crate::error::{CheckoutError, GatewayError, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// The interactive checkout loop.
///
/// One task owns the form state; user input and the settlement of the
/// in-flight submission are discrete events multiplexed by `select!`.
/// Generic over its input and output so tests can drive it in-process.
///
/// Input events: `orange` / `momo` switch the wallet, `payer` submits,
/// `quitter` ends the session, anything else edits the phone field.
pub struct ConsoleSession<R, W> {
    engine: Arc<CheckoutEngine>,
    state: FormState,
    inflight: Option<Submission>,
    lines: Lines<BufReader<R>>,
    out: W,
}

enum Event {
    Input(Option<String>),
    Settled(std::result::Result<(), GatewayError>),
}

enum Flow {
    Continue,
    Quit,
}

impl<R, W> ConsoleSession<R, W>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    pub fn new(engine: Arc<CheckoutEngine>, input: R, out: W) -> Self {
        Self {
            engine,
            state: FormState::new(),
            inflight: None,
            lines: BufReader::new(input).lines(),
            out,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        renderer::render_card(&self.state, &mut self.out)?;

        loop {
            let event = match self.inflight.as_mut() {
                Some(submission) => {
                    tokio::select! {
                        biased;
                        outcome = submission.outcome() => Event::Settled(outcome),
                        line = self.lines.next_line() => Event::Input(line?),
                    }
                }
                None => Event::Input(self.lines.next_line().await?),
            };

            match event {
                Event::Settled(outcome) => self.settle(outcome)?,
                Event::Input(Some(line)) => {
                    if let Flow::Quit = self.handle_line(line.trim())? {
                        break;
                    }
                }
                Event::Input(None) => {
                    // EOF on a piped session: an in-flight call still
                    // settles before exit.
                    if let Some(mut submission) = self.inflight.take() {
                        let outcome = submission.outcome().await;
                        self.state = std::mem::take(&mut self.state).complete(outcome);
                        renderer::render_card(&self.state, &mut self.out)?;
                    }
                    break;
                }
            }
        }

        // An explicit quit mid-flight tears the view down; the task must
        // not settle into a form that no longer exists.
        if let Some(submission) = self.inflight.take() {
            submission.abort();
        }
        Ok(())
    }

    /// Hands the output sink back once the session is over.
    pub fn into_output(self) -> W {
        self.out
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match line {
            "" => Ok(Flow::Continue),
            "quitter" | "quit" => Ok(Flow::Quit),
            "orange" => self.apply(|state| state.select_method(PaymentMethod::OrangeMoney)),
            "momo" => self.apply(|state| state.select_method(PaymentMethod::MtnMomo)),
            "payer" | "pay" => self.submit(),
            raw => self.apply(|state| state.edit_phone(raw)),
        }
    }

    fn apply(&mut self, action: impl FnOnce(FormState) -> FormState) -> Result<Flow> {
        self.state = action(std::mem::take(&mut self.state));
        renderer::render_card(&self.state, &mut self.out)?;
        Ok(Flow::Continue)
    }

    fn submit(&mut self) -> Result<Flow> {
        // Disabled control: while a call is in flight a second submit does
        // nothing, and in particular never reaches the gateway.
        if self.state.is_loading() {
            renderer::render_alert(&mut self.out, renderer::BTN_SENDING)?;
            return Ok(Flow::Continue);
        }

        let request = match self.engine.prepare(&self.state) {
            Ok(request) => request,
            Err(CheckoutError::ValidationError(_)) => {
                renderer::render_alert(&mut self.out, MSG_INVALID_PHONE)?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err),
        };

        self.state = match std::mem::take(&mut self.state).begin_submission() {
            Ok(pending) => {
                self.inflight = Some(Submission::spawn(self.engine.clone(), request));
                pending
            }
            Err(unchanged) => unchanged,
        };
        renderer::render_card(&self.state, &mut self.out)?;
        Ok(Flow::Continue)
    }

    fn settle(&mut self, outcome: std::result::Result<(), GatewayError>) -> Result<()> {
        self.inflight = None;
        self.state = std::mem::take(&mut self.state).complete(outcome);
        renderer::render_card(&self.state, &mut self.out)?;
        Ok(())
    }
}
