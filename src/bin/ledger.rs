//! Interactive order-ledger CLI.
//!
//! A REPL standing in for the dashboard: regenerate orders, set filters,
//! print the order table and the KPI cards.
//!
//! Usage:
//!   cargo run --bin ledger
//!   ledger  (if installed via cargo install)

use nanoledger::{Category, Ledger, dates};
use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    let mut ledger = Ledger::new();
    if let Err(e) = ledger.generate_orders(nanoledger::DEFAULT_ORDER_COUNT) {
        eprintln!("failed to generate initial orders: {e}");
        return;
    }

    println!("Order Ledger CLI v0.1.0");
    println!("Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("ledger> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        match cmd.as_deref() {
            Some("help" | "h" | "?") => print_help(),
            Some("quit" | "exit" | "q") => break,
            Some("orders" | "o") => print_orders(&ledger),
            Some("kpi" | "k") => print_kpis(&ledger),
            Some("filters" | "f") => print_filters(&ledger),
            Some("gen" | "g") => handle_generate(&mut ledger, &parts[1..]),
            Some("date" | "d") => handle_date(&mut ledger, &parts[1..]),
            Some("cat" | "c") => handle_category(&mut ledger, &parts[1..]),
            Some("reset" | "r") => {
                ledger.reset_filters();
                println!("Filters cleared.");
            }
            Some(cmd) => println!("Unknown command: '{}'. Type 'help' for commands.", cmd),
            None => {}
        }
    }

    println!("Goodbye!");
}

fn print_help() {
    println!(
        r#"
Commands:
  gen [n] [seed]          Regenerate n orders (default 100), optionally seeded
  date <day>              Filter by date (DD/MM/YYYY or YYYY-MM-DD)
  date clear              Clear the date filter
  cat <name>              Filter by category (traditional|special|sweet)
  cat clear               Clear the category filter
  reset                   Clear both filters
  orders                  Show the filtered order table
  kpi                     Show the KPI cards
  filters                 Show the active filters
  help                    Show this help
  quit                    Exit

Examples:
  gen 200 42              200 orders from seed 42
  date 15/06/2024         Only orders on June 15th
  cat sweet               Only Sweet orders
"#
    );
}

fn print_orders(ledger: &Ledger) {
    let orders = ledger.filtered_orders();

    if orders.is_empty() {
        println!("No orders match the active filters.");
        return;
    }

    println!();
    println!("  ORDERS ({} shown)", orders.len());
    println!("  ─────────────────────────────────────────────────────────────────");
    println!(
        "  {:>5}  {:<20}  {:<10}  {:<11}  {:>9}  {:<9}",
        "ID", "Client", "Date", "Category", "Value", "Status"
    );

    for order in orders.iter().take(40) {
        println!(
            "  #{}  {:<20}  {}  {:<11}  R$ {:>6}  {:<9}",
            order.id,
            order.client,
            dates::format_day(order.date),
            order.category.to_string(),
            order.value.to_string(),
            order.status.to_string(),
        );
    }

    if orders.len() > 40 {
        println!("  ... and {} more", orders.len() - 40);
    }
    println!();
}

fn print_kpis(ledger: &Ledger) {
    let metrics = ledger.metrics();

    println!();
    println!("  KPIs for {}", dates::format_day(ledger.today()));
    println!("  ──────────────────────────────");
    println!("  Daily revenue     R$ {:>10}", metrics.daily_revenue.to_string());
    println!("  Monthly revenue   R$ {:>10}", metrics.monthly_revenue.to_string());
    println!("  Total orders      {:>10}", metrics.total_orders);
    println!("  Today's orders    {:>10}", metrics.today_orders);
    println!("  Cancelled orders  {:>10}", metrics.cancelled_orders);
    println!();
}

fn print_filters(ledger: &Ledger) {
    let filter = ledger.filter();

    match filter.date {
        Some(date) => println!("  Date:     {}", dates::format_day(date)),
        None => println!("  Date:     (none)"),
    }
    match filter.category {
        Some(category) => println!("  Category: {}", category),
        None => println!("  Category: (none)"),
    }
}

fn handle_generate(ledger: &mut Ledger, args: &[&str]) {
    let count: usize = match args.first() {
        Some(s) => match s.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid count: '{}'", s);
                return;
            }
        },
        None => nanoledger::DEFAULT_ORDER_COUNT,
    };

    let seed: Option<u64> = match args.get(1) {
        Some(s) => match s.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                println!("Invalid seed: '{}'", s);
                return;
            }
        },
        None => None,
    };

    let result = match seed {
        Some(seed) => ledger.generate_orders_seeded(count, seed),
        None => ledger.generate_orders(count),
    };

    match result {
        Ok(()) => println!("Generated {} orders.", ledger.store().len()),
        Err(e) => println!("Generation failed: {e}"),
    }
}

fn handle_date(ledger: &mut Ledger, args: &[&str]) {
    match args.first() {
        None => println!("Usage: date <DD/MM/YYYY|YYYY-MM-DD|clear>"),
        Some(&"clear") => {
            ledger.set_date_filter(None);
            println!("Date filter cleared.");
        }
        Some(input) => match ledger.set_date_filter_str(input) {
            Ok(()) => println!("Date filter set."),
            Err(e) => println!("{e}"),
        },
    }
}

fn handle_category(ledger: &mut Ledger, args: &[&str]) {
    match args.first() {
        None => println!("Usage: cat <traditional|special|sweet|clear>"),
        Some(&"clear") => {
            ledger.set_category_filter(None);
            println!("Category filter cleared.");
        }
        Some(input) => match input.parse::<Category>() {
            Ok(category) => {
                ledger.set_category_filter(Some(category));
                println!("Category filter set to {category}.");
            }
            Err(e) => println!("{e}"),
        },
    }
}
