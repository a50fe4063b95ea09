use dtsgen_core::MetadataSet;
use dtsgen_lib::Generator;
use dtsgen_lib::typegen::typescript::SkipReason;
use indoc::indoc;

use super::Seeds;
use super::generate::GenerateArgs;
use super::graph::{describe, render};

const MANIFEST: &str = indoc! {r#"
    {
        "assemblies": [
            {
                "name": "Acme.Core",
                "types": [
                    {
                        "namespace": "Acme",
                        "name": "Widget",
                        "methods": [{"name": "Parts", "returns": "Acme.Parts.Gear"}]
                    },
                    {"namespace": "Acme", "name": "Kind", "kind": "enum", "sealed": true}
                ]
            },
            {
                "name": "Acme.Parts",
                "types": [
                    {"namespace": "Acme.Parts", "name": "Gear", "abstract": true},
                    {"namespace": "Acme.Parts", "name": "IPart", "kind": "interface", "abstract": true}
                ]
            }
        ]
    }
"#};

fn manifest() -> MetadataSet {
    MetadataSet::from_json(MANIFEST).unwrap()
}

#[test]
fn no_seeds_means_every_assembly() {
    let set = manifest();
    let mut generator = Generator::new(&set);
    Seeds::default().apply(&set, &mut generator).unwrap();

    insta::assert_snapshot!(render(generator.graph()), @r"
    enum Acme.Kind
    class Acme.Widget
    abstract class Acme.Parts.Gear
    interface Acme.Parts.IPart
    ");
}

#[test]
fn explicit_seeds_close_over_references() {
    let set = manifest();
    let mut generator = Generator::new(&set);
    let seeds = Seeds {
        assemblies: Vec::new(),
        types: vec!["Acme.Widget".to_string()],
    };
    seeds.apply(&set, &mut generator).unwrap();

    insta::assert_snapshot!(render(generator.graph()), @r"
    class Acme.Widget
    abstract class Acme.Parts.Gear
    ");
}

#[test]
fn unknown_seed_is_an_error() {
    let set = manifest();
    let mut generator = Generator::new(&set);
    let seeds = Seeds {
        assemblies: vec!["Acme.Missing".to_string()],
        types: Vec::new(),
    };

    let err = seeds.apply(&set, &mut generator).unwrap_err();
    assert_eq!(err.to_string(), "unknown assembly `Acme.Missing`");
}

#[test]
fn skip_reasons_are_described() {
    assert_eq!(describe(SkipReason::Nested), "nested type");
    assert_eq!(
        describe(SkipReason::ClosedGenericArgument),
        "closed generic argument"
    );
}

#[test]
fn generate_args_build_config() {
    let args = GenerateArgs {
        metadata_path: "m.json".into(),
        seeds: Seeds::default(),
        output: None,
        root: Some("host".to_string()),
        indent: None,
        header: false,
        readonly: false,
        static_members: false,
    };
    let set = manifest();
    let mut generator = Generator::with_config(&set, args.config());
    generator.add_type_named("Acme.Kind").unwrap();

    insta::assert_snapshot!(generator.emit(), @r"
    declare namespace host {
        namespace Acme {
            enum Kind {
            }
        }
    }
    ");
}

#[test]
fn manifest_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    std::fs::write(&path, MANIFEST).unwrap();

    let set = super::load_metadata(&path);
    assert_eq!(set.assemblies().len(), 2);
    assert_eq!(set.len(), 4);
}
