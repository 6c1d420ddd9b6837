use std::path::PathBuf;

use descasca_core::error::{DescascaError, Result};
use descasca_core::store::{ArchiveStore, OpenParams};
use descasca_core::store_factory::{Backend, open_store};
use descasca_core::{Table, filter_by_box, parse, snapshot};

use crate::presentation::export::write_csv;
use crate::presentation::render;

fn store_from_args(archive: PathBuf) -> Result<Box<dyn ArchiveStore>> {
    open_store(
        Backend::Json,
        OpenParams {
            store_path: archive,
        },
    )
}

fn analyze_batch(records: &[Vec<String>], box_code: i64, export: Option<PathBuf>) -> Result<()> {
    let table = Table::build(records)?;
    let snap = snapshot(&table, None)?;

    let all: Vec<usize> = (0..table.len()).collect();
    render::table(&table, &all);
    render::snapshot(&snap);
    render::box_counts(&snap);

    if box_code != 0 {
        let rows = filter_by_box(&table, box_code);
        if rows.is_empty() {
            println!("Nenhum tronco encontrado na Box {box_code}.");
        } else {
            println!("Registos da Box {box_code}:");
            render::table(&table, &rows);
        }
    }

    if let Some(out) = export {
        write_csv(&table, &out)?;
        println!("Exportado para {}", out.display());
    }
    Ok(())
}

pub fn handle_analyze(
    input: PathBuf,
    box_code: i64,
    export: Option<PathBuf>,
    archive: PathBuf,
    no_archive: bool,
) -> Result<()> {
    let bytes = std::fs::read(&input)?;
    let records = parse(&bytes)?;

    if !no_archive {
        let name = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.txt")
            .to_string();
        let mut store = store_from_args(archive)?;
        store.put(&name, records.clone())?;
        println!("Dados analisados e arquivados como {name}");
    }

    analyze_batch(&records, box_code, export)
}

pub fn handle_archive_ls(archive: PathBuf) -> Result<()> {
    let store = store_from_args(archive)?;
    let names = store.list();
    if names.is_empty() {
        println!("Sem dados registados para mostrar.");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

pub fn handle_archive_show(
    name: String,
    box_code: i64,
    export: Option<PathBuf>,
    archive: PathBuf,
) -> Result<()> {
    let store = store_from_args(archive)?;
    let Some(batch) = store.get(&name) else {
        return Err(DescascaError::Archive(format!(
            "no archived upload named {name:?}"
        )));
    };
    let batch = batch.to_vec();
    println!("Análise do {name}");
    analyze_batch(&batch, box_code, export)
}

pub fn handle_archive_rm(name: String, archive: PathBuf) -> Result<()> {
    let mut store = store_from_args(archive)?;
    if store.delete(&name)? {
        println!("Arquivo {name} excluído com sucesso.");
    } else {
        println!("Erro ao excluir o arquivo: {name} não existe.");
    }
    Ok(())
}
