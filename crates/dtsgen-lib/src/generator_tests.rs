use dtsgen_core::TypeRef;
use indoc::indoc;

use crate::test_utils::{admitted, metadata};
use crate::{Error, Generator, TsEmitConfig};

const SHOP: &str = indoc! {r#"
    {
        "assemblies": [
            {
                "name": "Shop",
                "types": [
                    {
                        "namespace": "Shop",
                        "name": "Cart",
                        "methods": [
                            {"name": "Add", "params": [{"name": "item", "type": "Shop.Item"}]},
                            {"name": "Total", "returns": "System.Decimal"}
                        ]
                    }
                ]
            },
            {
                "name": "Shop.Model",
                "types": [
                    {
                        "namespace": "Shop",
                        "name": "Item",
                        "fields": [{"name": "Price", "type": "System.Decimal"}]
                    },
                    {"namespace": "Shop", "name": "Unused"}
                ]
            }
        ]
    }
"#};

#[test]
fn seeding_then_emitting() {
    let set = metadata(SHOP);
    let mut generator = Generator::with_config(&set, TsEmitConfig::new().header(false));

    assert_eq!(generator.add_assembly("Shop").unwrap(), 2);
    assert_eq!(admitted(generator.graph()), ["Shop.Cart", "Shop.Item"]);

    insta::assert_snapshot!(generator.emit(), @r"
    declare namespace dotnet {
        namespace Shop {
            class Cart {
                Add(item: dotnet.Shop.Item): void;
                Total(): number;
            }
            class Item {
                Price: number;
            }
        }
    }
    ");
}

#[test]
fn seeds_accumulate() {
    let set = metadata(SHOP);
    let mut generator = Generator::new(&set);

    assert_eq!(generator.add_type(&TypeRef::named("Shop.Item")), 1);
    assert_eq!(generator.add_type_named("Shop.Unused").unwrap(), 1);
    assert_eq!(generator.add_assembly("Shop.Model").unwrap(), 0);
    assert_eq!(generator.graph().len(), 2);
}

#[test]
fn default_config_has_banner() {
    let set = metadata(SHOP);
    let mut generator = Generator::new(&set);
    generator.add_type_named("Shop.Item").unwrap();

    assert!(generator.config().header);
    assert!(
        generator
            .emit()
            .starts_with("/** Auto-generated by dtsgen. Do not edit. */\n\ndeclare namespace dotnet {")
    );
}

#[test]
fn unknown_seeds_are_reported() {
    let set = metadata(SHOP);
    let mut generator = Generator::new(&set);

    assert!(matches!(
        generator.add_assembly("Missing"),
        Err(Error::UnknownAssembly(_))
    ));
    assert!(matches!(
        generator.add_type_named("Shop.Missing"),
        Err(Error::UnknownType(_))
    ));
    assert!(generator.graph().is_empty());
}

#[test]
fn write_then_clear() {
    let set = metadata(SHOP);
    let mut generator = Generator::new(&set);
    generator.add_assembly("Shop").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.d.ts");
    generator.write(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), generator.emit());

    generator.clear();
    assert!(generator.graph().is_empty());
    insta::assert_snapshot!(generator.emit(), @r"
    /** Auto-generated by dtsgen. Do not edit. */

    declare namespace dotnet {
    }
    ");
}
