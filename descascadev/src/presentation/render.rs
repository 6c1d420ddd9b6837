use descasca_core::Table;
use descasca_core::metrics::Snapshot;

/// Print the given rows of a typed table with their 1-based display indices.
pub fn table(t: &Table, rows: &[usize]) {
    println!("Linha  {}", t.columns.join(" | "));
    for &i in rows {
        println!("{:<5}  {}", i + 1, t.rows[i].join(" | "));
    }
}

pub fn snapshot(s: &Snapshot) {
    println!("Período da análise: {}", s.analysis_date_label());
    println!("Quantidade Produzida: {}", s.total);
    println!(
        "Tempo total de trabalho: {}h:{}min:{}seg",
        s.elapsed.hours, s.elapsed.minutes, s.elapsed.seconds
    );
    match s.throughput {
        Some(q) => println!("Quantidade por minuto: {q:.2} troncos/minuto"),
        None => println!("Quantidade por minuto: indefinida (tempo decorrido nulo)"),
    }
}

pub fn box_counts(s: &Snapshot) {
    println!("N.º de Troncos por cada Box:");
    println!("{:<4} {:<10} Descrição", "Box", "Quantidade");
    for b in &s.per_box {
        println!("{:<4} {:<10} {}", b.code, b.count, b.description);
    }
}
