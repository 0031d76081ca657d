//! Topic 2: loops, conditionals, matching and scope-exit actions.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use chrono::{Datelike, Local, Timelike, Weekday};
use std::cell::RefCell;
use std::io::{self, Write};

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("2.1", "for loop", for_loop)?;
    catalogue.register_titled("2.2", "while loop", while_loop)?;
    catalogue.register_titled("2.3", "loop as expression", loop_expression)?;
    catalogue.register_titled("2.5", "if and recursion", if_recursion)?;
    catalogue.register_titled("2.6", "scoped if binding", scoped_binding)?;
    catalogue.register_titled("2.7", "scoped if/else binding", scoped_binding_else)?;
    catalogue.register_titled("2.8", "newton square root", newton_sqrt)?;
    catalogue.register_titled("2.9", "match on os", match_os)?;
    catalogue.register_titled("2.10", "when is saturday", when_is_saturday)?;
    catalogue.register_titled("2.11", "match guards", greeting_now)?;
    catalogue.register_titled("2.12", "scope exit", scope_exit)?;
    catalogue.register_titled("2.13", "stacked scope exits", stacked_scope_exits)?;
    Ok(())
}

fn for_loop(out: &mut dyn Write) -> io::Result<()> {
    let mut sum = 0;
    for i in 0..10 {
        sum += i;
    }
    writeln!(out, "{sum}")
}

fn while_loop(out: &mut dyn Write) -> io::Result<()> {
    let mut sum = 1;
    while sum < 1000 {
        sum += sum;
    }
    writeln!(out, "{sum}")
}

fn loop_expression(out: &mut dyn Write) -> io::Result<()> {
    let mut sum = 1;
    let sum = loop {
        if sum >= 1000 {
            break sum;
        }
        sum += sum;
    };
    writeln!(out, "{sum}")
}

/// Square root rendered as text, with an `i` suffix for negative input.
pub fn sqrt_text(x: f64) -> String {
    if x < 0.0 {
        return sqrt_text(-x) + "i";
    }
    x.sqrt().to_string()
}

fn if_recursion(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} {}", sqrt_text(2.0), sqrt_text(-4.0))
}

pub fn pow_capped(x: f64, n: f64, lim: f64) -> f64 {
    match x.powf(n) {
        v if v < lim => v,
        _ => lim,
    }
}

fn scoped_binding(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} {}", pow_capped(3.0, 2.0, 10.0), pow_capped(3.0, 3.0, 20.0))
}

fn pow_capped_verbose(x: f64, n: f64, lim: f64, out: &mut dyn Write) -> io::Result<f64> {
    let v = x.powf(n);
    if v < lim {
        return Ok(v);
    }
    writeln!(out, "{v} >= {lim}")?;
    Ok(lim)
}

fn scoped_binding_else(out: &mut dyn Write) -> io::Result<()> {
    let a = pow_capped_verbose(3.0, 2.0, 10.0, out)?;
    let b = pow_capped_verbose(3.0, 3.0, 20.0, out)?;
    writeln!(out, "{a} {b}")
}

/// Ten fixed Newton steps from z = 1, returning every intermediate guess.
pub fn newton_steps(x: f64) -> Vec<f64> {
    let mut z = 1.0;
    (0..10)
        .map(|_| {
            z -= (z * z - x) / (2.0 * z);
            z
        })
        .collect()
}

/// Newton's method until successive guesses differ by less than 1e-10.
pub fn newton_sqrt_converged(x: f64) -> f64 {
    const EPSILON: f64 = 1e-10;
    let mut z = 1.0;
    loop {
        let next = z - (z * z - x) / (2.0 * z);
        if (next - z).abs() < EPSILON {
            return next;
        }
        z = next;
    }
}

fn newton_sqrt(out: &mut dyn Write) -> io::Result<()> {
    for z in newton_steps(2.0) {
        writeln!(out, "{z}")?;
    }
    writeln!(out, "{}", newton_sqrt_converged(2.0))
}

pub fn os_label(os: &str) -> String {
    match os {
        "macos" => "OS X.".to_string(),
        "linux" => "Linux.".to_string(),
        other => format!("{other}."),
    }
}

fn match_os(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Rust runs on {}", os_label(std::env::consts::OS))
}

pub fn saturday_message(today: Weekday) -> &'static str {
    let days = (Weekday::Sat.num_days_from_monday() + 7 - today.num_days_from_monday()) % 7;
    match days {
        0 => "Today!",
        1 => "Tomorrow.",
        2 => "In two days.",
        _ => "Too far away.",
    }
}

fn when_is_saturday(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "When's Saturday?")?;
    writeln!(out, "{}", saturday_message(Local::now().weekday()))
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "Good morning.",
        h if h < 17 => "Good afternoon.",
        _ => "Good evening.",
    }
}

fn greeting_now(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", greeting(Local::now().hour()))
}

// =============================================================================
// Scope-exit actions
// =============================================================================

/// Appends its message to the log when dropped.
struct OnExit<'a> {
    log: &'a RefCell<Vec<String>>,
    message: String,
}

impl<'a> OnExit<'a> {
    fn new(log: &'a RefCell<Vec<String>>, message: impl Into<String>) -> Self {
        Self {
            log,
            message: message.into(),
        }
    }
}

impl Drop for OnExit<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(std::mem::take(&mut self.message));
    }
}

/// Pending exit messages, flushed last-in first-out on drop.
struct ExitStack<'a> {
    log: &'a RefCell<Vec<String>>,
    pending: Vec<String>,
}

impl<'a> ExitStack<'a> {
    fn new(log: &'a RefCell<Vec<String>>) -> Self {
        Self {
            log,
            pending: Vec::new(),
        }
    }

    fn defer(&mut self, message: impl Into<String>) {
        self.pending.push(message.into());
    }
}

impl Drop for ExitStack<'_> {
    fn drop(&mut self) {
        let mut log = self.log.borrow_mut();
        while let Some(message) = self.pending.pop() {
            log.push(message);
        }
    }
}

pub fn scope_exit_log() -> Vec<String> {
    let log = RefCell::new(Vec::new());
    {
        let _world = OnExit::new(&log, "world");
        log.borrow_mut().push("hello".to_string());
    }
    log.into_inner()
}

pub fn stacked_exit_log(count: usize) -> Vec<String> {
    let log = RefCell::new(Vec::new());
    {
        log.borrow_mut().push("counting".to_string());
        let mut stack = ExitStack::new(&log);
        for i in 0..count {
            stack.defer(i.to_string());
        }
        log.borrow_mut().push("done".to_string());
    }
    log.into_inner()
}

fn scope_exit(out: &mut dyn Write) -> io::Result<()> {
    for line in scope_exit_log() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn stacked_scope_exits(out: &mut dyn Write) -> io::Result<()> {
    for line in stacked_exit_log(10) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
