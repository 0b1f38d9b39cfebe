//! # lc-cli
//!
//! Drives the dynamic array and both max stacks step by step, printing the
//! state after every operation.
//!
//! ## Script syntax
//!
//! ```text
//! array:  append:<v>  insert:<k>:<v>  pop  pop:<k>  get:<k>
//! stack:  <v> (push)  push:<v>  pop  peek  max
//! ```
//!
//! e.g. `lc-cli array append:4 append:5 insert:1:22 pop:0`
//!      `lc-cli stack 3 1 4 1 5 pop max`

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use colored::*;
use lc_array::DynamicArray;
use lc_core::Result;
use lc_stack::{CountedMaxStack, MaxStack, PairMaxStack};
use tracing_subscriber::EnvFilter;

// ─── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "lc-cli")]
#[command(about = "Step-by-step driver for the dynamic array and O(1)-max stacks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the reference array and max-stack scenarios
    Demo,
    /// Run array operations, e.g. `append:4 insert:1:22 pop`
    Array {
        #[arg(required = true)]
        ops: Vec<String>,
    },
    /// Run stack operations on both max-stack variants, e.g. `3 1 4 pop max`
    Stack {
        #[arg(required = true)]
        ops: Vec<String>,
    },
    /// Interactive REPL over one array and one pair of max stacks
    Interactive,
}

// ─── Operations ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
enum ArrayOp {
    Append(i64),
    Insert(usize, i64),
    Pop,
    PopAt(usize),
    Get(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum StackOp {
    Push(i64),
    Pop,
    Peek,
    Max,
}

fn parse_num<T: std::str::FromStr>(token: &str, what: &str) -> std::result::Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("invalid {} '{}'", what, token))
}

fn parse_array_op(token: &str) -> std::result::Result<ArrayOp, String> {
    let parts: Vec<&str> = token.split(':').collect();
    match parts.as_slice() {
        ["append", v] => Ok(ArrayOp::Append(parse_num(v, "value")?)),
        ["insert", k, v] => Ok(ArrayOp::Insert(
            parse_num(k, "index")?,
            parse_num(v, "value")?,
        )),
        ["pop"] => Ok(ArrayOp::Pop),
        ["pop", k] => Ok(ArrayOp::PopAt(parse_num(k, "index")?)),
        ["get", k] => Ok(ArrayOp::Get(parse_num(k, "index")?)),
        _ => Err(format!("unknown array operation '{}'", token)),
    }
}

fn parse_stack_op(token: &str) -> std::result::Result<StackOp, String> {
    let parts: Vec<&str> = token.split(':').collect();
    match parts.as_slice() {
        ["push", v] => Ok(StackOp::Push(parse_num(v, "value")?)),
        ["pop"] => Ok(StackOp::Pop),
        ["peek"] => Ok(StackOp::Peek),
        ["max"] => Ok(StackOp::Max),
        [v] => parse_num(v, "value")
            .map(StackOp::Push)
            .map_err(|_| format!("unknown stack operation '{}'", token)),
        _ => Err(format!("unknown stack operation '{}'", token)),
    }
}

/// Apply one array op, returning a description of its result.
fn apply_array_op(array: &mut DynamicArray<i64>, op: &ArrayOp) -> Result<String> {
    match *op {
        ArrayOp::Append(v) => {
            array.append(v);
            Ok(format!("append({})", v))
        }
        ArrayOp::Insert(k, v) => {
            array.insert(k, v)?;
            Ok(format!("insert({}, {})", k, v))
        }
        ArrayOp::Pop => Ok(format!("pop() → {}", array.pop()?)),
        ArrayOp::PopAt(k) => Ok(format!("pop({}) → {}", k, array.pop_at(k)?)),
        ArrayOp::Get(k) => Ok(format!("get({}) → {}", k, array.get(k)?)),
    }
}

/// Apply one stack op to a single variant, returning a description.
fn apply_stack_op<S: MaxStack<i64>>(stack: &mut S, op: &StackOp) -> Result<String> {
    match *op {
        StackOp::Push(v) => {
            stack.push(v);
            Ok(format!("push({})", v))
        }
        StackOp::Pop => Ok(format!("pop() → {}", stack.pop()?)),
        StackOp::Peek => Ok(format!("peek() → {}", stack.peek()?)),
        StackOp::Max => Ok(format!("max() → {}", stack.max()?)),
    }
}

// ─── Pretty printing ──────────────────────────────────────────────────────

fn header(text: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar.bright_cyan());
    println!("  {}", text.bold().bright_white());
    println!("{}", bar.bright_cyan());
}

fn section(text: &str) {
    println!("\n{} {}", "▸".bright_yellow(), text.bold());
}

fn step(text: &str) {
    println!("  {} {}", "•".bright_green(), text);
}

fn failure(text: &str) {
    println!("  {} {}", "✗".bright_red().bold(), text.bright_red());
}

fn show_array(array: &DynamicArray<i64>) {
    println!(
        "    {}  {} {}  {} {}",
        array.to_string().bright_white(),
        "len".dimmed(),
        array.len().to_string().bright_magenta(),
        "capacity".dimmed(),
        array.capacity().to_string().bright_magenta()
    );
}

fn show_stacks(pair: &PairMaxStack<i64>, counted: &CountedMaxStack<i64>) {
    let entries: Vec<String> = pair
        .entries()
        .map(|entry| format!("({}, {})", entry.element, entry.max))
        .collect();
    let data: Vec<String> = counted.data().map(|v| v.to_string()).collect();
    let runs: Vec<String> = counted
        .runs()
        .map(|run| format!("({}, {})", run.max, run.count))
        .collect();

    println!("    {} [{}]", "pair    ".dimmed(), entries.join(", "));
    println!("    {} [{}]", "data    ".dimmed(), data.join(", "));
    println!("    {} [{}]", "runs    ".dimmed(), runs.join(", "));
}

fn run_array_op(array: &mut DynamicArray<i64>, op: &ArrayOp) {
    match apply_array_op(array, op) {
        Ok(done) => step(&done),
        Err(err) => failure(&format!("{:?}: {}", op, err)),
    }
    show_array(array);
}

fn run_stack_op(pair: &mut PairMaxStack<i64>, counted: &mut CountedMaxStack<i64>, op: &StackOp) {
    let a = apply_stack_op(pair, op);
    let b = apply_stack_op(counted, op);
    match (&a, &b) {
        (Ok(done), Ok(other)) if done == other => step(done),
        (Err(err), Err(other)) if err == other => failure(&format!("{:?}: {}", op, err)),
        _ => failure(&format!("variants disagree: pair {:?}, counted {:?}", a, b)),
    }
    show_stacks(pair, counted);
}

// ─── Demo ──────────────────────────────────────────────────────────────────

fn run_demo() {
    header("DEMO — Dynamic Array & O(1)-Max Stacks");

    section("Phase 1: Append grows capacity by doubling");
    let mut array = DynamicArray::new();
    for v in [4, 5, 10, 15, 22] {
        run_array_op(&mut array, &ArrayOp::Append(v));
    }

    section("Phase 2: Positional insert shifts right");
    run_array_op(&mut array, &ArrayOp::Insert(1, 22));
    run_array_op(&mut array, &ArrayOp::Insert(4, 10));

    section("Phase 3: Positional pop shifts left; capacity is kept");
    run_array_op(&mut array, &ArrayOp::PopAt(1));
    run_array_op(&mut array, &ArrayOp::Pop);
    run_array_op(&mut array, &ArrayOp::Get(9));

    section("Phase 4: Both max stacks see the same pushes");
    let mut pair = PairMaxStack::new();
    let mut counted = CountedMaxStack::new();
    for v in [3, 1, 4, 1, 5] {
        run_stack_op(&mut pair, &mut counted, &StackOp::Push(v));
    }
    run_stack_op(&mut pair, &mut counted, &StackOp::Max);

    section("Phase 5: Popping restores the previous maximum");
    run_stack_op(&mut pair, &mut counted, &StackOp::Pop);
    run_stack_op(&mut pair, &mut counted, &StackOp::Max);
    run_stack_op(&mut pair, &mut counted, &StackOp::Peek);
}

// ─── Scripts ───────────────────────────────────────────────────────────────

fn run_array_script(tokens: &[String]) -> std::result::Result<(), String> {
    let ops = tokens
        .iter()
        .map(|token| parse_array_op(token))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    header("ARRAY SCRIPT");
    let mut array = DynamicArray::new();
    for op in &ops {
        run_array_op(&mut array, op);
    }
    Ok(())
}

fn run_stack_script(tokens: &[String]) -> std::result::Result<(), String> {
    let ops = tokens
        .iter()
        .map(|token| parse_stack_op(token))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    header("STACK SCRIPT");
    let mut pair = PairMaxStack::new();
    let mut counted = CountedMaxStack::new();
    for op in &ops {
        run_stack_op(&mut pair, &mut counted, op);
    }
    Ok(())
}

// ─── Interactive ───────────────────────────────────────────────────────────

fn run_interactive() -> io::Result<()> {
    header("INTERACTIVE REPL — Linear Collections");

    println!();
    println!("  {}", "Commands:".bold().underline());
    println!(
        "    {} <op>...    Array ops: append:<v> insert:<k>:<v> pop pop:<k> get:<k>",
        "a".bright_cyan()
    );
    println!(
        "    {} <op>...    Stack ops: <v> push:<v> pop peek max",
        "s".bright_cyan()
    );
    println!("    {}           Show all structures", "show".bright_cyan());
    println!("    {}           Exit", "quit".bright_cyan());
    println!();

    let mut array = DynamicArray::new();
    let mut pair = PairMaxStack::new();
    let mut counted = CountedMaxStack::new();

    loop {
        print!("{}", "lc> ".bright_cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((command, args)) = parts.split_first() else {
            continue;
        };

        match *command {
            "a" | "array" => {
                for token in args {
                    match parse_array_op(token) {
                        Ok(op) => run_array_op(&mut array, &op),
                        Err(err) => failure(&err),
                    }
                }
            }
            "s" | "stack" => {
                for token in args {
                    match parse_stack_op(token) {
                        Ok(op) => run_stack_op(&mut pair, &mut counted, &op),
                        Err(err) => failure(&err),
                    }
                }
            }
            "show" => {
                show_array(&array);
                show_stacks(&pair, &counted);
            }
            "quit" | "exit" | "q" => break,
            other => println!("  {} Unknown command '{}'", "!".bright_yellow(), other),
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Demo => {
            run_demo();
            Ok(())
        }
        Commands::Array { ops } => run_array_script(&ops),
        Commands::Stack { ops } => run_stack_script(&ops),
        Commands::Interactive => run_interactive().map_err(|err| err.to_string()),
    };

    if let Err(err) = outcome {
        eprintln!("{} {}", "error:".bright_red().bold(), err);
        std::process::exit(2);
    }
}
