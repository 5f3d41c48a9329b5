use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dbm_codec::Strategy;
use dbm_merge::{Decision, EditPlan, Instruction};

/// One row of a resolution report.
pub struct ResolutionRow {
    pub subject: String,
    pub type_name: String,
    pub strategy: Option<Strategy>,
}

pub fn print_plan_summary(class_name: &str, plan: &EditPlan) {
    println!("Class: {class_name}");
    if !plan.decisions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Constant"), header_cell("Decision")]);
        apply_table_style(&mut table);
        for entry in &plan.decisions {
            table.add_row(vec![Cell::new(&entry.identifier), decision_cell(entry.decision)]);
        }
        println!("{table}");
    }

    if plan.is_noop() {
        println!("No changes.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Op"),
        header_cell("Member"),
        header_cell("Anchor"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, instruction) in plan.instructions.iter().enumerate() {
        let row = match instruction {
            Instruction::Remove { member } => vec![
                Cell::new("remove").fg(Color::Red),
                Cell::new(member),
                dim_cell("-"),
            ],
            Instruction::Insert(insertion) if insertion.conflict => vec![
                Cell::new("insert (conflict)")
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold),
                Cell::new(&insertion.member),
                Cell::new(&insertion.anchor),
            ],
            Instruction::Insert(insertion) => vec![
                Cell::new("insert").fg(Color::Green),
                Cell::new(&insertion.member),
                Cell::new(&insertion.anchor),
            ],
            Instruction::ImplementInterface { interface } => vec![
                Cell::new("implement").fg(Color::Blue),
                Cell::new(interface),
                dim_cell("-"),
            ],
        };
        let mut cells = vec![dim_cell(index + 1)];
        cells.extend(row);
        table.add_row(cells);
    }
    println!("{table}");
    println!(
        "{} insertion(s), {} removal(s), {} conflict(s)",
        plan.insertions().count(),
        plan.removals().count(),
        plan.conflicts()
    );
}

pub fn strategy_table(order: &[Strategy]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Strategy"),
        header_cell("Claims"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, strategy) in order.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(strategy.display_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(strategy.claimed_types()),
        ]);
    }
    table
}

pub fn resolution_table(rows: &[ResolutionRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Strategy"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let strategy = match row.strategy {
            Some(strategy) => Cell::new(strategy.display_name()).fg(Color::Green),
            None => Cell::new("unsupported")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        };
        table.add_row(vec![
            Cell::new(&row.subject),
            Cell::new(&row.type_name),
            strategy,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn decision_cell(decision: Decision) -> Cell {
    match decision {
        Decision::Insert => Cell::new(decision.display_name()).fg(Color::Green),
        Decision::Unchanged => dim_cell(decision.display_name()),
        Decision::Conflicting => Cell::new(decision.display_name())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
