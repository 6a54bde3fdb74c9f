//! The guided tour: prints each feature of the crate with its results.
//!
//! Output goes to any `io::Write`, so the binary hands it stdout and tests
//! hand it a `Vec<u8>`.

use crate::config::TourConfig;
use crate::error::ConfigError;
use crate::generators::{make_accumulator, make_counter, make_multiplier, Accumulator, Counter};
use crate::introspect::ProcessInfo;
use crate::numeric::{factorial, factorial_recursive, is_prime, power};
use crate::parallel::{par_apply, par_filter, par_reduce};
use crate::shared::SharedCounter;
use crate::transforms::{apply, compose, filter, reduce};
use colored::Colorize;
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use tracing::debug;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Numeric,
    Recursion,
    Closures,
    Accumulator,
    Transforms,
    Composition,
    Semantics,
    Process,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Numeric,
        Section::Recursion,
        Section::Closures,
        Section::Accumulator,
        Section::Transforms,
        Section::Composition,
        Section::Semantics,
        Section::Process,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Numeric => "numeric",
            Section::Recursion => "recursion",
            Section::Closures => "closures",
            Section::Accumulator => "accumulator",
            Section::Transforms => "transforms",
            Section::Composition => "composition",
            Section::Semantics => "semantics",
            Section::Process => "process",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Section::Numeric => "Numeric Operations",
            Section::Recursion => "Recursion",
            Section::Closures => "Closures Capturing State",
            Section::Accumulator => "Shared Accumulator Cell",
            Section::Transforms => "Map, Filter and Reduce",
            Section::Composition => "Function Composition",
            Section::Semantics => "Values vs Shared References",
            Section::Process => "Process Introspection",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown section '{s}' (expected one of: {})",
                    Section::ALL.iter().join(", ")
                )
            })
    }
}

// =============================================================================
// Tour
// =============================================================================

pub struct Tour {
    config: TourConfig,
    sections: Vec<Section>,
}

impl Tour {
    pub fn new(config: TourConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sections = config.enabled_sections()?;
        Ok(Tour { config, sections })
    }

    /// Replaces the configured section list. Order is still tour order.
    pub fn with_sections(mut self, mut sections: Vec<Section>) -> Self {
        sections.sort();
        sections.dedup();
        self.sections = sections;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, &section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            debug!(section = section.name(), "rendering section");
            self.heading(out, section)?;
            match section {
                Section::Numeric => self.numeric(out)?,
                Section::Recursion => self.recursion(out)?,
                Section::Closures => self.closures(out)?,
                Section::Accumulator => self.accumulator(out)?,
                Section::Transforms => self.transforms(out)?,
                Section::Composition => self.composition(out)?,
                Section::Semantics => self.semantics(out)?,
                Section::Process => self.process(out)?,
            }
        }
        Ok(())
    }

    fn heading<W: Write>(&self, out: &mut W, section: Section) -> io::Result<()> {
        let title = format!("=== {} ===", section.title());
        if self.config.color {
            writeln!(out, "{}", title.bold().cyan())
        } else {
            writeln!(out, "{title}")
        }
    }

    fn note<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.config.color {
            writeln!(out, "  {}", text.dimmed())
        } else {
            writeln!(out, "  {text}")
        }
    }

    fn failure(&self, message: String) -> String {
        let message = format!("error: {message}");
        if self.config.color {
            message.red().to_string()
        } else {
            message
        }
    }

    fn numeric<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let inputs = &self.config.numeric;

        for &n in &inputs.factorial_inputs {
            let shown = match factorial(n) {
                Ok(value) => value.to_string(),
                Err(err) => self.failure(err.to_string()),
            };
            writeln!(out, "factorial({n}) = {shown}")?;
        }

        let primes = inputs
            .prime_inputs
            .iter()
            .map(|&n| format!("{n}:{}", is_prime(n)))
            .join(" ");
        writeln!(out, "is_prime -> {primes}")?;

        for &(base, exponent) in &inputs.power_cases {
            let shown = match power(base, exponent) {
                Ok(value) => value.to_string(),
                Err(err) => self.failure(err.to_string()),
            };
            writeln!(out, "power({base}, {exponent}) = {shown}")?;
        }
        Ok(())
    }

    fn recursion<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for &n in &self.config.numeric.factorial_inputs {
            let recursive = factorial_recursive(n);
            let agrees = recursive == factorial(n);
            let shown = match recursive {
                Ok(value) => value.to_string(),
                Err(err) => self.failure(err.to_string()),
            };
            writeln!(out, "factorial_recursive({n}) = {shown} (matches iterative: {agrees})")?;
        }

        let sample = &self.config.transforms.sample;
        writeln!(
            out,
            "recursive sum of {} = {}",
            show_list(sample),
            sum_recursive(sample)
        )?;
        self.note(out, "each call peels off the head and recurses on the tail")
    }

    fn closures<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let inputs = &self.config.generators;

        let mut next = make_counter(inputs.counter_start);
        let values: Vec<i64> = (0..inputs.counter_steps).map(|_| next()).collect();
        writeln!(
            out,
            "make_counter({}) called {} times -> {}",
            inputs.counter_start,
            inputs.counter_steps,
            show_list(&values)
        )?;

        let mut first = make_counter(0);
        let mut second = make_counter(0);
        first();
        first();
        writeln!(
            out,
            "two counters from 0: first called twice = {}, second called once = {}",
            first(),
            second()
        )?;

        let counter = Counter::new(inputs.counter_start);
        counter.next_value();
        writeln!(
            out,
            "Counter::new({}) after one step: current = {}",
            inputs.counter_start,
            counter.current()
        )?;

        let multiply = make_multiplier(inputs.multiplier);
        let head: Vec<i64> = self.config.transforms.sample.iter().copied().take(3).collect();
        writeln!(
            out,
            "make_multiplier({}) over {} -> {}",
            inputs.multiplier,
            show_list(&head),
            show_list(&apply(&head, &multiply))
        )?;
        self.note(out, "each closure owns its own copy of the captured count")
    }

    fn accumulator<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let initial = self.config.generators.accumulator_initial;

        let (add, subtract, get) = make_accumulator(initial);
        add(50);
        let after_add = get();
        subtract(30);
        writeln!(
            out,
            "make_accumulator({initial}): add(50) -> {after_add}, subtract(30) -> {}",
            get()
        )?;

        let acc = Accumulator::new(initial);
        let (add, subtract, get) = acc.handles();
        add.call(50);
        subtract.call(30);
        writeln!(
            out,
            "Accumulator handles: get() = {}, accumulator sees {} ({} holders of one cell)",
            get.call(),
            acc.get(),
            acc.holders()
        )?;
        self.note(out, "all three handles mutate the same Rc<Cell<i64>>")
    }

    fn transforms<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let sample = &self.config.transforms.sample;
        let square = |x: i64| x.wrapping_mul(x);
        let even = |x: i64| x % 2 == 0;
        let sum = |acc: i64, x: i64| acc.wrapping_add(x);

        let squares = apply(sample, square);
        let evens = filter(sample, even);
        let total = reduce(sample, 0, sum);

        writeln!(out, "input             = {}", show_list(sample))?;
        writeln!(out, "apply(square)     = {}", show_list(&squares))?;
        writeln!(out, "filter(even)      = {}", show_list(&evens))?;
        writeln!(out, "reduce(0, +)      = {total}")?;

        let parallel_agrees = par_apply(sample, square) == squares
            && par_filter(sample, even) == evens
            && par_reduce(sample, 0, sum) == total;
        writeln!(out, "parallel versions agree: {parallel_agrees}")
    }

    fn composition<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let add_five = |x: i64| x + 5;
        let double = |x: i64| x * 2;

        writeln!(out, "compose(add_five, double)(7) = {}", compose(add_five, double)(7))?;
        writeln!(out, "compose(double, add_five)(7) = {}", compose(double, add_five)(7))?;

        let factor = self.config.generators.multiplier;
        let scale_then_square = compose(|x: i64| x.wrapping_mul(x), make_multiplier(factor));
        writeln!(
            out,
            "compose(square, make_multiplier({factor}))(2) = {}",
            scale_then_square(2)
        )?;
        self.note(out, "the right-hand function runs first")
    }

    fn semantics<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let original = self.config.generators.counter_start;
        let copy = original.wrapping_add(10);
        writeln!(out, "i64 copy: original = {original}, copy after += 10 = {copy}")?;

        let acc = Accumulator::new(original);
        let alias = acc.clone();
        alias.add(10);
        writeln!(
            out,
            "Accumulator clone: original = {}, clone = {}, same cell: {}",
            acc.get(),
            alias.get(),
            acc.shares_cell_with(&alias)
        )?;

        let counter = SharedCounter::new(0);
        thread::scope(|s| {
            for _ in 0..4 {
                let counter = counter.clone();
                s.spawn(move || {
                    for _ in 0..250 {
                        counter.next_value();
                    }
                });
            }
        });
        writeln!(
            out,
            "SharedCounter across 4 threads x 250 increments = {}",
            counter.current()
        )?;
        self.note(out, "Copy types duplicate the value; Rc and Arc duplicate the pointer")
    }

    fn process<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let info = ProcessInfo::current();
        let unknown = || "unknown".to_string();

        writeln!(out, "pid          = {}", info.pid)?;
        writeln!(out, "program      = {}", info.program_name().unwrap_or_else(unknown))?;
        writeln!(out, "args         = {}", info.args.iter().join(" "))?;
        writeln!(
            out,
            "working dir  = {}",
            info.working_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(unknown)
        )?;
        writeln!(
            out,
            "cpus         = {}",
            info.available_cpus
                .map(|n| n.to_string())
                .unwrap_or_else(unknown)
        )
    }
}

fn show_list(values: &[i64]) -> String {
    format!("[{}]", values.iter().join(", "))
}

fn sum_recursive(values: &[i64]) -> i64 {
    match values {
        [] => 0,
        [head, tail @ ..] => head.wrapping_add(sum_recursive(tail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> TourConfig {
        TourConfig {
            color: false,
            ..TourConfig::default()
        }
    }

    fn render(tour: &Tour) -> String {
        let mut out = Vec::new();
        tour.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    mod section_tests {
        use super::*;

        #[test]
        fn test_parse_section_names() {
            assert_eq!("numeric".parse::<Section>(), Ok(Section::Numeric));
            assert_eq!(" Process ".parse::<Section>(), Ok(Section::Process));
            assert!("quantum".parse::<Section>().unwrap_err().contains("quantum"));
        }

        #[test]
        fn test_names_round_trip() {
            for section in Section::ALL {
                assert_eq!(section.to_string().parse::<Section>(), Ok(section));
            }
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_numeric_section() {
            let tour = Tour::new(plain_config())
                .unwrap()
                .with_sections(vec![Section::Numeric]);
            let text = render(&tour);

            assert!(text.contains("=== Numeric Operations ==="));
            assert!(text.contains("factorial(5) = 120"));
            assert!(text.contains("factorial(-5) = error:"));
            assert!(text.contains("17:true"));
            assert!(text.contains("-5:false"));
            assert!(text.contains("power(2, 3) = 8"));
            assert!(text.contains("power(2, -3) = error: "));
        }

        #[test]
        fn test_closure_and_accumulator_sections() {
            let tour = Tour::new(plain_config())
                .unwrap()
                .with_sections(vec![Section::Accumulator, Section::Closures]);
            let text = render(&tour);

            assert!(text.contains("make_counter(5) called 3 times -> [6, 7, 8]"));
            assert!(text.contains("first called twice = 3, second called once = 1"));
            assert!(text.contains("add(50) -> 150, subtract(30) -> 120"));
            assert!(text.contains("get() = 120, accumulator sees 120 (4 holders of one cell)"));
            // closures render before accumulator regardless of request order
            assert!(text.find("Closures").unwrap() < text.find("Accumulator").unwrap());
        }

        #[test]
        fn test_transform_and_composition_sections() {
            let tour = Tour::new(plain_config())
                .unwrap()
                .with_sections(vec![Section::Transforms, Section::Composition]);
            let text = render(&tour);

            assert!(text.contains("filter(even)      = [2, 4, 6, 8, 10]"));
            assert!(text.contains("reduce(0, +)      = 55"));
            assert!(text.contains("parallel versions agree: true"));
            assert!(text.contains("compose(add_five, double)(7) = 19"));
            assert!(text.contains("compose(double, add_five)(7) = 24"));
            assert!(text.contains("compose(square, make_multiplier(3))(2) = 36"));
        }

        #[test]
        fn test_semantics_and_recursion_sections() {
            let tour = Tour::new(plain_config())
                .unwrap()
                .with_sections(vec![Section::Semantics, Section::Recursion]);
            let text = render(&tour);

            assert!(text.contains("original = 5, copy after += 10 = 15"));
            assert!(text.contains("original = 15, clone = 15, same cell: true"));
            assert!(text.contains("= 1000"));
            assert!(text.contains("recursive sum of [1, 2, 3, 4, 5, 6, 7, 8, 9, 10] = 55"));
            assert!(text.contains("factorial_recursive(10) = 3628800 (matches iterative: true)"));
        }

        #[test]
        fn test_process_section() {
            let tour = Tour::new(plain_config())
                .unwrap()
                .with_sections(vec![Section::Process]);
            let text = render(&tour);
            assert!(text.contains(&format!("pid          = {}", std::process::id())));
        }

        #[test]
        fn test_full_tour_renders_every_heading() {
            let tour = Tour::new(plain_config()).unwrap();
            let text = render(&tour);
            for section in Section::ALL {
                assert!(text.contains(section.title()), "missing {section}");
            }
        }

        #[test]
        fn test_invalid_config_rejected() {
            let mut config = plain_config();
            config.transforms.sample.clear();
            assert!(Tour::new(config).is_err());
        }
    }

    mod extreme_input_tests {
        use super::*;

        #[test]
        fn test_composition_with_huge_multiplier_wraps() {
            let config = TourConfig::from_toml_str(
                "color = false\n[generators]\nmultiplier = 3000000000",
            )
            .unwrap();
            let tour = Tour::new(config)
                .unwrap()
                .with_sections(vec![Section::Composition]);
            let text = render(&tour);
            let expected = 6_000_000_000_i64.wrapping_mul(6_000_000_000);
            assert!(text.contains(&format!(
                "compose(square, make_multiplier(3000000000))(2) = {expected}"
            )));
        }

        #[test]
        fn test_semantics_at_i64_max_wraps() {
            let config = TourConfig::from_toml_str(&format!(
                "color = false\n[generators]\ncounter_start = {}",
                i64::MAX
            ))
            .unwrap();
            let tour = Tour::new(config)
                .unwrap()
                .with_sections(vec![Section::Semantics]);
            let text = render(&tour);
            let wrapped = i64::MAX.wrapping_add(10);
            assert!(text.contains(&format!(
                "original = {}, copy after += 10 = {wrapped}",
                i64::MAX
            )));
            assert!(text.contains(&format!("original = {wrapped}, clone = {wrapped}")));
        }
    }

    #[test]
    fn test_sum_recursive() {
        assert_eq!(sum_recursive(&[]), 0);
        assert_eq!(sum_recursive(&[1, 2, 3, 4, 5]), 15);
    }
}
