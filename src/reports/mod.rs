use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::time::Duration;
use swipe_engine::config::ScoringWeights;
use swipe_engine::dictionary::Dictionary;
use swipe_engine::simulate::EvalSummary;
use swipe_engine::Prediction;

fn right_align_from(table: &mut Table, first: usize, last: usize) {
    for i in first..=last {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_predictions(trace: &str, query: &str, predictions: &[Prediction]) {
    println!("\nTrace: {}  ->  Query: {}", trace, query);

    if predictions.is_empty() {
        println!("   (no suggestions)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Freq"),
    ]);
    right_align_from(&mut table, 2, 3);

    for (i, p) in predictions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&p.word).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", p.score)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", p.frequency)),
        ]);
    }
    println!("{}", table);
}

pub fn print_dictionary_summary(dictionary: &Dictionary, w: &ScoringWeights) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![Cell::new("Generation"), Cell::new(dictionary.generation())]);
    table.add_row(vec![Cell::new("Entries"), Cell::new(dictionary.len())]);
    table.add_row(vec![
        Cell::new("Max Frequency"),
        Cell::new(format!("{:.0}", dictionary.max_frequency())),
    ]);
    table.add_row(vec![
        Cell::new("Longest Path"),
        Cell::new(dictionary.max_canonical_len()),
    ]);
    table.add_row(vec![
        Cell::new("Ins / Del"),
        Cell::new(format!("{:.2} / {:.2}", w.insertion_penalty, w.deletion_penalty)),
    ]);
    table.add_row(vec![
        Cell::new("Alpha / Scale"),
        Cell::new(format!("{:.2} / {:.2}", w.blend_alpha, w.similarity_scale)),
    ]);
    right_align_from(&mut table, 1, 1);
    println!("\n{}", table);
}

pub fn print_bucket_histogram(buckets: &[((char, usize), usize)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("First").add_attribute(Attribute::Bold),
        Cell::new("Len"),
        Cell::new("Entries").fg(Color::Cyan),
    ]);
    right_align_from(&mut table, 1, 2);

    for ((first, len), count) in buckets {
        table.add_row(vec![
            Cell::new(first),
            Cell::new(len),
            Cell::new(count).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_eval_report(s: &EvalSummary, w: &ScoringWeights, elapsed: Duration) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Samples").add_attribute(Attribute::Bold),
        Cell::new("Top-1").fg(Color::Green),
        Cell::new(format!("Top-{}", s.k)).fg(Color::Green),
        Cell::new("OOV").fg(Color::Red),
        Cell::new("Empty").fg(Color::Red),
        Cell::new(format!("Ins\n{:.2}", w.insertion_penalty)),
        Cell::new(format!("Del\n{:.2}", w.deletion_penalty)),
        Cell::new(format!("Alpha\n{:.2}", w.blend_alpha)),
        Cell::new("ms/query"),
    ]);
    right_align_from(&mut table, 0, 8);

    let per_query_ms = if s.samples > 0 {
        elapsed.as_secs_f64() * 1000.0 / s.samples as f64
    } else {
        0.0
    };

    table.add_row(vec![
        Cell::new(s.samples).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", s.top1_rate() * 100.0)).fg(Color::Green),
        Cell::new(format!("{:.1}%", s.top_k_rate() * 100.0)).fg(Color::Green),
        Cell::new(s.out_of_vocabulary).fg(Color::Red),
        Cell::new(s.empty).fg(Color::Red),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.3}", per_query_ms)),
    ]);
    println!("\n{}", table);
}
