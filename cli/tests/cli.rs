use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIELDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fields templateEngineKind="Velocity">
    <field name="Fecha"/>
    <field name="Cliente"/>
    <field name="Resultados.Item.Precio"/>
</fields>"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yml"), "{}\n").unwrap();
        fs::write(dir.path().join("ventas.fields"), FIELDS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fieldpicker").unwrap();
        cmd.arg("--config").arg(self.path("config.yml"));
        cmd
    }
}

#[test]
fn catalog_lists_fields_by_tab() {
    let ws = Workspace::new();
    ws.command()
        .arg("catalog")
        .arg(ws.path("ventas.fields"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[G] Generales\n  Cliente\n  Fecha\n"))
        .stdout(predicate::str::contains("[U] Únicos\n  (Carga un XML o cambia de pestaña)"))
        .stdout(predicate::str::contains("[P] Plurales\n  Resultados.Item.Precio"));
}

#[test]
fn catalog_filter_and_descending() {
    let ws = Workspace::new();
    ws.command()
        .args(["catalog", &ws.path("ventas.fields"), "-t", "general", "-d"])
        .assert()
        .success()
        .stdout("[G] Generales\n  Fecha\n  Cliente\n");

    ws.command()
        .args(["catalog", &ws.path("ventas.fields"), "-t", "general", "-f", "CLI"])
        .assert()
        .success()
        .stdout("[G] Generales\n  Cliente\n");
}

#[test]
fn catalog_rejects_malformed_file() {
    let ws = Workspace::new();
    fs::write(ws.path("roto.fields"), "<fields><field name=").unwrap();
    ws.command()
        .arg("catalog")
        .arg(ws.path("roto.fields"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn token_for_plural_field_and_loop() {
    let ws = Workspace::new();
    ws.command()
        .args(["token", "Resultados.Cliente.Nombre"])
        .assert()
        .success()
        .stdout("$r.cliente.nombre\n");

    ws.command()
        .args(["token", "--loop", "open"])
        .assert()
        .success()
        .stdout("#foreach($r in $resultados)\n");
}

#[test]
fn fragment_escapes_token() {
    let ws = Workspace::new();
    ws.command()
        .args(["fragment", "$a<b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MERGEFIELD  $a&lt;b  \\* MERGEFORMAT"))
        .stdout(predicate::str::contains("«$a&lt;b»"));
}

#[test]
fn insert_hidden_regions_then_clean() {
    let ws = Workspace::new();
    ws.command()
        .args([
            "insert",
            &ws.path("ventas.fields"),
            "Fecha",
            "Resultados.Item.Precio",
            "--strategy",
            "hidden-region",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$Fecha $r.item.precio \n"))
        .stdout(predicate::str::contains("region #1 tag=$Fecha"))
        .stdout(predicate::str::contains("region #2 tag=$r.item.precio"));

    ws.command()
        .args([
            "insert",
            &ws.path("ventas.fields"),
            "Fecha",
            "--strategy",
            "hidden-region",
            "--clean",
        ])
        .assert()
        .success()
        .stdout("$Fecha \n");
}

#[test]
fn insert_field_codes_with_loop() {
    let ws = Workspace::new();
    ws.command()
        .args([
            "insert",
            &ws.path("ventas.fields"),
            ":foreach",
            "Resultados.Item.Precio",
            ":end",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "«#foreach($r in $resultados)» «$r.item.precio» «#end» ",
        ))
        .stdout(predicate::str::contains("field-code $r.item.precio"));
}
