//! Interactive CPU scheduling simulator.
//!
//! A numbered menu over a session process registry. Set `RUST_LOG=debug`
//! to trace dispatch decisions on stderr.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use cpu_sched::models::{Policy, Process};
use cpu_sched::registry::ProcessRegistry;
use cpu_sched::scheduler::simulate;
use cpu_sched::workload::{self, WorkloadConfig};
use cpu_sched::{report, store, ScheduleError};

const MENU_ITEMS: [&str; 10] = [
    "Input Process Details",
    "Run FCFS (First Come First Serve)",
    "Run SJF (Shortest Job First)",
    "Run Round Robin",
    "Run Priority Scheduling",
    "Save Processes to File",
    "Load Processes from File",
    "Display Current Processes",
    "Exit",
    "Generate Random Processes",
];

const EXIT: i64 = 9;

/// Largest random workload menu option 10 will generate.
const MAX_GENERATED: i64 = 1000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run()
}

/// Menu loop over arbitrary line input and text output.
struct Console<R, W> {
    input: R,
    output: W,
    registry: ProcessRegistry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            registry: ProcessRegistry::new(),
        }
    }

    /// Runs until the user exits or input ends.
    fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt_int("Select an option: ")? else {
                break;
            };

            let keep_going = match choice {
                1 => self.input_processes()?,
                2 => self.run_policy(Policy::FirstComeFirstServed)?,
                3 => self.run_policy(Policy::ShortestJobFirst)?,
                4 => self.run_round_robin()?,
                5 => self.run_policy(Policy::Priority)?,
                6 => self.save()?,
                7 => self.load()?,
                8 => self.list()?,
                EXIT => {
                    writeln!(self.output, "\nThank you for using the CPU Scheduling Simulator!")?;
                    return Ok(());
                }
                10 => self.generate()?,
                _ => {
                    writeln!(
                        self.output,
                        "\nInvalid choice {choice}. Please select an option from 1 to {}.",
                        MENU_ITEMS.len()
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^60}", "CPU SCHEDULING SIMULATOR")?;
        writeln!(self.output, "{rule}")?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {item}", i + 1)?;
        }
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until an integer is entered; `None` at end of input.
    fn prompt_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "'{line}' is not a whole number, try again.")?,
            }
        }
    }

    /// Prompts until a non-empty word is entered; `None` at end of input.
    fn prompt_word(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
        }
    }

    /// Replaces the registry with interactively entered processes.
    ///
    /// Nothing is committed unless every process is entered successfully.
    fn input_processes(&mut self) -> Result<bool> {
        let count = loop {
            let Some(n) = self.prompt_int("\nHow many processes do you want to add? ")? else {
                return Ok(false);
            };
            if n >= 0 {
                break n;
            }
            writeln!(self.output, "The number of processes cannot be negative.")?;
        };

        let mut pending = ProcessRegistry::new();
        let mut i = 1;
        while i <= count {
            writeln!(self.output, "\nProcess {i}:")?;
            let Some(process) = self.prompt_process()? else {
                return Ok(false);
            };
            match pending.add(process) {
                Ok(()) => i += 1,
                Err(errors) => {
                    for e in errors {
                        writeln!(self.output, "  {e}")?;
                    }
                    writeln!(self.output, "Please re-enter process {i}.")?;
                }
            }
        }

        self.registry = pending;
        writeln!(self.output, "\n{} process(es) added.", self.registry.len())?;
        Ok(true)
    }

    fn prompt_process(&mut self) -> Result<Option<Process>> {
        let Some(id) = self.prompt_int("Process ID: ")? else {
            return Ok(None);
        };
        let Some(arrival) = self.prompt_int("Arrival Time: ")? else {
            return Ok(None);
        };
        let Some(burst) = self.prompt_int("Burst Time: ")? else {
            return Ok(None);
        };
        let Some(priority) = self.prompt_int("Priority (lower = higher priority): ")? else {
            return Ok(None);
        };
        Ok(Some(
            Process::new(id, burst)
                .with_arrival(arrival)
                .with_priority(priority),
        ))
    }

    fn report_empty(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nThere are no processes yet. Add or load some processes first."
        )?;
        Ok(())
    }

    fn run_policy(&mut self, policy: Policy) -> Result<bool> {
        match simulate(self.registry.snapshot(), policy) {
            Ok(result) => write!(self.output, "\n{}", report::run_report(&result))?,
            Err(ScheduleError::EmptyInput) => self.report_empty()?,
            Err(e) => writeln!(self.output, "\n{e}")?,
        }
        Ok(true)
    }

    fn run_round_robin(&mut self) -> Result<bool> {
        if self.registry.is_empty() {
            self.report_empty()?;
            return Ok(true);
        }

        loop {
            let Some(quantum) = self.prompt_int("\nEnter time quantum: ")? else {
                return Ok(false);
            };
            match simulate(self.registry.snapshot(), Policy::RoundRobin { quantum }) {
                Ok(result) => {
                    write!(self.output, "\n{}", report::run_report(&result))?;
                    return Ok(true);
                }
                Err(e @ ScheduleError::InvalidQuantum(_)) => writeln!(self.output, "{e}")?,
                Err(ScheduleError::EmptyInput) => {
                    self.report_empty()?;
                    return Ok(true);
                }
                Err(e @ ScheduleError::ClockOverflow) => {
                    writeln!(self.output, "\n{e}")?;
                    return Ok(true);
                }
            }
        }
    }

    fn save(&mut self) -> Result<bool> {
        if self.registry.is_empty() {
            writeln!(self.output, "\nNo processes to save, add some first.")?;
            return Ok(true);
        }
        let Some(path) = self.prompt_word("\nFile name to save to: ")? else {
            return Ok(false);
        };
        match store::save(&path, self.registry.snapshot()) {
            Ok(()) => writeln!(
                self.output,
                "Saved {} process(es) to {path}.",
                self.registry.len()
            )?,
            Err(e) => writeln!(self.output, "Could not save: {e}")?,
        }
        Ok(true)
    }

    fn load(&mut self) -> Result<bool> {
        let Some(path) = self.prompt_word("\nFile name to load from: ")? else {
            return Ok(false);
        };
        match store::load(&path) {
            Ok(processes) => {
                let count = processes.len();
                match self.registry.replace(processes) {
                    Ok(()) => writeln!(self.output, "Loaded {count} process(es) from {path}.")?,
                    Err(errors) => {
                        for e in errors {
                            writeln!(self.output, "  {e}")?;
                        }
                    }
                }
            }
            Err(e) => writeln!(self.output, "Could not load: {e}")?,
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<bool> {
        if self.registry.is_empty() {
            writeln!(self.output, "\nThere is nothing to show.")?;
        } else {
            writeln!(self.output, "\nCurrent Processes:")?;
            write!(self.output, "{}", report::registry_table(self.registry.snapshot()))?;
        }
        Ok(true)
    }

    fn generate(&mut self) -> Result<bool> {
        let count = loop {
            let Some(n) = self.prompt_int("\nHow many processes? ")? else {
                return Ok(false);
            };
            if n > MAX_GENERATED {
                writeln!(self.output, "At most {MAX_GENERATED} processes can be generated.")?;
                continue;
            }
            if let Ok(count) = usize::try_from(n) {
                if count > 0 {
                    break count;
                }
            }
            writeln!(self.output, "Enter a positive number of processes.")?;
        };
        let Some(seed) = self.prompt_int("Random seed: ")? else {
            return Ok(false);
        };

        let config = WorkloadConfig::new(count).with_seed(seed.unsigned_abs());
        let processes = workload::generate(&config);
        match self.registry.replace(processes) {
            Ok(()) => writeln!(self.output, "Generated {count} process(es).")?,
            Err(errors) => {
                for e in errors {
                    writeln!(self.output, "  {e}")?;
                }
            }
        }
        Ok(true)
    }
}
