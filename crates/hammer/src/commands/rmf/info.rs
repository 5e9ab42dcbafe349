use clap::Args;
use hammer_rmf::{MapObject, RmfDocument};
use itertools::Itertools;
use miette::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct InfoArgs {
    /// An input RMF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Print the object tree as well
    #[arg(long, default_value_t = false)]
    tree: bool,
}

impl InfoArgs {
    fn print_object(object: &MapObject, depth: usize) {
        let indent = "  ".repeat(depth);
        match object {
            MapObject::World(world) => {
                println!("{indent}{} {}", object.type_tag().blue(), world.classname)
            }
            MapObject::Entity(entity) => {
                let name = entity.property("targetname").unwrap_or_default();
                println!(
                    "{indent}{} {} {} ({} brushes)",
                    object.type_tag().blue(),
                    entity.classname,
                    name.dimmed(),
                    entity.brushes.len()
                )
            }
            MapObject::Group(group) => println!(
                "{indent}{} ({} objects)",
                object.type_tag().blue(),
                group.objects.len()
            ),
            MapObject::Solid(solid) => println!(
                "{indent}{} ({} faces)",
                object.type_tag().blue(),
                solid.faces.len()
            ),
        }

        for child in object.children() {
            Self::print_object(child, depth + 1);
        }
    }

    fn print_summary(&self, document: &RmfDocument) {
        println!("{}", self.file.display().bold());
        println!("  classname: {}", document.root.classname);
        for (key, value) in document.root.properties.iter() {
            println!("  {key}: {}", value.dimmed());
        }

        println!("{} ({})", "visgroups".bold(), document.visgroups.len());
        for visgroup in &document.visgroups {
            let state = if visgroup.is_visible() { "shown" } else { "hidden" };
            println!("  [{}] {} {}", visgroup.index, visgroup.name, state.dimmed());
        }

        let counts = document.objects().map(MapObject::type_tag).counts();
        println!("{}", "objects".bold());
        for (tag, count) in counts.into_iter().sorted() {
            println!("  {tag}: {count}");
        }
        println!("  faces: {}", document.solids().map(|s| s.faces.len()).sum::<usize>());
        println!("  paths: {}", document.root.paths.len());

        let textures = document.texture_names();
        println!("{} ({})", "textures".bold(), textures.len());
        println!("  {}", textures.iter().join(", "));

        if let Some(camera) = document.doc_info.as_ref().and_then(|d| d.active_camera()) {
            println!(
                "{} eye {:?} looking at {:?}",
                "camera".bold(),
                <[f32; 3]>::from(camera.eye),
                <[f32; 3]>::from(camera.look_at)
            );
        }
    }

    pub fn handle(&self) -> Result<()> {
        let document = super::read_document(&self.file)?;
        self.print_summary(&document);

        if self.tree {
            for object in &document.root.objects {
                Self::print_object(object, 0);
            }
        }

        Ok(())
    }
}
