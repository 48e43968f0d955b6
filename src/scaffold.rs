use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::debug;

use compose::component::Component;
use compose::name::ComponentName;
use compose::template::Mode;

use crate::App;

#[derive(Clone, Args)]
pub(crate) struct Scaffold {
    #[arg(
        value_name = "COMPONENT_NAME",
        num_args = 1..=2,
        required = true,
        help = "Directorio donde se creará el componente (por defecto '.') y nombre del componente creado.",
    )]
    targets: Vec<String>,
    #[arg(short = 'y', long = "yes", help = "Saltarse confirmación. (Sí a todo)")]
    yes: bool,
    #[arg(short = 's', long = "simple", help = "Crear componente sin Actions ni View.")]
    simple: bool,
}

impl Scaffold {
    fn dir(&self) -> PathBuf {
        match self.targets.as_slice() {
            [dir, _] => PathBuf::from(dir),
            _ => PathBuf::from("."),
        }
    }

    fn component_name(&self) -> &str {
        self.targets.last().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Written(PathBuf),
    Cancelled,
}

impl App {
    pub(crate) fn scaffold(&self, confirm: impl FnOnce() -> Result<bool>) -> Result<Outcome> {
        execute(&self.cli.scaffold, confirm)
    }
}

fn execute(args: &Scaffold, confirm: impl FnOnce() -> Result<bool>) -> Result<Outcome> {
    let name = args.component_name().parse::<ComponentName>()?;
    let mode = Mode::from_simple(args.simple);
    debug!(%name, ?mode, "component name accepted");

    let component = Component::new(name, args.dir(), mode);

    print!(
        "Esta operación resultará en el siguiente arbol de archivos:\n {}",
        component.tree()
    );
    println!("Si alguno de estos archivos ya existe, serán sobreescritos.");

    if !args.yes && !confirm()? {
        println!("Operación cancelada.");
        return Ok(Outcome::Cancelled);
    }

    let root = component.write().context(format!(
        "no se pudo crear el componente en '{}'",
        component.root().display()
    ))?;
    println!("Operación realizada exitosamente.");

    Ok(Outcome::Written(root))
}
