//! Literal alias data for the TiDB clusters.

use std::collections::BTreeMap;

use super::{AliasTable, AliasTables, EnvContexts};
use crate::core::env::Environment;

type Entries = &'static [(&'static str, &'static [&'static str])];

const CONTEXTS: Entries = &[
    ("m-tidb-prod-a-ea1-us", &["prod1a", "proda", "prod"]),
    ("m-tidb-prod-b-ea1-us", &["prod1b", "prodb"]),
    ("m-tidb-prod-c-ea1-us", &["prod1e", "prodc", "prode"]),
    ("m-tidb-stg-a-ea1-us", &["stg1a", "stga", "stg"]),
    ("m-tidb-stg-b-ea1-us", &["stg1b", "stgb"]),
    ("m-tidb-stg-c-ea1-us", &["stg1e", "stgc", "stge"]),
    ("m-tidb-test-a-ea1-us", &["test1a", "testa", "test"]),
    ("m-tidb-test-b-ea1-us", &["test1b", "testb"]),
    ("m-tidb-test-c-ea1-us", &["test1e", "testc", "teste"]),
];

const PROD_CONTEXTS: Entries = &[
    ("m-tidb-prod-a-ea1-us", &["1a", "a"]),
    ("m-tidb-prod-b-ea1-us", &["1b", "b"]),
    ("m-tidb-prod-c-ea1-us", &["1e", "c", "e"]),
];

const STG_CONTEXTS: Entries = &[
    ("m-tidb-stg-a-ea1-us", &["1a", "a"]),
    ("m-tidb-stg-b-ea1-us", &["1b", "b"]),
    ("m-tidb-stg-c-ea1-us", &["1e", "c", "e"]),
];

const TEST_CONTEXTS: Entries = &[
    ("m-tidb-test-a-ea1-us", &["1a", "a"]),
    ("m-tidb-test-b-ea1-us", &["1b", "b"]),
    ("m-tidb-test-c-ea1-us", &["1e", "c", "e"]),
];

const PROD_NAMESPACES: Entries = &[
    ("tidb-mussel-prod-ml-dr", &["mldr"]),
    ("tidb-mussel-prod-ml", &["ml"]),
    ("tidb-mussel-prod-ml-dr-1", &["mldr1"]),
    ("tidb-mussel-prod-ml-dr-2", &["mldr2"]),
    ("tidb-mussel-prod-ml-dr-3", &["mldr3"]),
    ("tidb-mussel-prod-dr", &["mergedr"]),
    ("tidb-mussel-prod", &["merge"]),
    ("tidb-mussel-prod-replace", &["replace"]),
    ("tidb-mussel-prod-replace-dr", &["replacedr"]),
    ("tidb-restore-operator-prod", &["restore", "restoreoperator"]),
    ("tidb-migration-operator-prod", &["migration", "migrationoperator"]),
    ("tidb-uds-prod-alpha", &["alpha", "udsalpha"]),
    ("tidb-uds-prod-alpha-dr", &["alphadr", "udsalphadr"]),
];

const STG_NAMESPACES: Entries = &[
    ("tidb-mussel-stg-replace", &["stgreplace", "replace"]),
    ("tidb-mussel-stg-replace-dr", &["replacedr"]),
    ("tidb-mussel-stg", &["stg", "merge"]),
    ("tidb-mussel-stg-v75", &["stg75", "merge75"]),
    ("tidb-mussel-stg-v75-dr", &["stg75dr", "merge75dr"]),
    ("tidb-mussel-stg-dr", &["mergedr"]),
    ("tidb-release-production", &["release"]),
    ("tidb-restore-operator-stg", &["restore", "restoreoperator"]),
    ("tidb-migration-operator-stg", &["migration", "migrationoperator"]),
    ("tidb-uds-full-shadow-stg", &["udsfullshadow", "fullshadow"]),
    ("tidb-uds-full-shadow-stg-br-1", &["udsfullshadowbr1", "fullshadowbr1"]),
    ("tidb-uds-full-shadow-stg-br-2", &["udsfullshadowbr2", "fullshadowbr2"]),
    ("tidb-uds-shadow-stg", &["udsshadow", "shadow"]),
    ("tidb-uds-seed-stg", &["seed", "udsseed"]),
    (
        "tidb-uds-stg-alpha-bl",
        &[
            "stagingalphablue",
            "stagingalphabl",
            "stagingalblue",
            "stagingalbl",
            "stgalphablue",
            "stgalphabl",
            "stgalblue",
            "stgalbl",
        ],
    ),
    (
        "tidb-uds-stg-alpha-gr",
        &[
            "testingalphagreen",
            "testingalphagr",
            "testingalgreen",
            "testingalgr",
            "testalphagreen",
            "testalphagr",
            "testalgreen",
            "testalgr",
        ],
    ),
    (
        "tidb-uds-test-alpha-bl",
        &[
            "alpha",
            "alphablue",
            "alphabl",
            "alblue",
            "albl",
            "testalpha",
            "testalphablue",
            "testalphabl",
            "testalblue",
            "testalbl",
            "testingalpha",
            "testingalphablue",
            "testingalphabl",
            "testingalblue",
            "testingalbl",
        ],
    ),
    (
        "tidb-uds-test-alpha-gr",
        &[
            "alphagreen",
            "alphagr",
            "algreen",
            "algr",
            "testalphagreen",
            "testalphagr",
            "testalgreen",
            "testalgr",
            "testingalphagreen",
            "testingalphagr",
            "testingalgreen",
            "testingalgr",
        ],
    ),
    ("tidb-ingestion-staging", &["ingestion"]),
    ("tidb-ingestion-staging-dr", &["ingestiondr"]),
];

const TEST_NAMESPACES: Entries = &[
    ("tidb-mussel-stag-replace", &["stagreplace", "loadtest"]),
    ("tidb-loadtest-br-1", &["loadtestbr1", "loadtest1"]),
    ("tidb-loadtest-br-2", &["loadtestbr2", "loadtest2"]),
    ("tidb-func-test", &["func"]),
    ("tidb-func-test-1", &["func1"]),
    ("tidb-func-test-2", &["func2"]),
    ("tidb-func-test-3", &["func3"]),
    (
        "tidb-rp-mussel-func-test",
        &["rp", "rpfunc", "rpmussfunc", "rpmusselfunc"],
    ),
    ("tidb-rp-mussel-func-test-br-1", &["rpfuncbr1", "rpbr1"]),
    ("tidb-rp-mussel-func-test-br-2", &["rprestore2", "rpbr2"]),
    (
        "tidb-rp-mussel-load-test",
        &["rpload", "rpmussload", "rpmusselload"],
    ),
    ("tidb-rp-func-test-2", &["rp2", "rpfunc2"]),
    ("tidb-rp-func-test-2-br-1", &["rpfunc2br1", "rp2br1"]),
    ("tidb-rp-func-test-2-br-2", &["rpfunc2br2", "rp2br2"]),
    ("tidb-rp-uds-func-test", &["rpudsfunc", "udsfunc"]),
    ("tidb-rp-uds-func-test-br-1", &["rpudsfuncbr1", "udsfuncbr1"]),
    ("tidb-rp-uds-func-test-br-2", &["rpudsfuncbr2", "udsfuncbr2"]),
    ("tidb-rp-uds-load-test", &["rpudsload", "udsload"]),
    ("tidb-restore-operator-test", &["restore", "restoreoperator"]),
    (
        "tidb-migration-operator-test",
        &[
            "migration",
            "migrationoperator",
            "migrationtest",
            "migrationoperatortest",
        ],
    ),
    (
        "tidb-migration-operator-dev",
        &["migrationdev", "migrationoperatordev"],
    ),
    ("tidb-test-single-cell", &["singlecell"]),
    ("tidb-toolbox-test", &["toolbox"]),
    ("tidb-dev-mdeng-test", &["mdeng"]),
    ("tidb-release-production", &["release"]),
    ("tidb-mussel-test-hightouch-1", &["musselhightouch"]),
    ("tidb-mussel-test-ht1-v75", &["musselhightouch75"]),
];

pub(super) fn tables() -> AliasTables {
    let env_contexts = BTreeMap::from([
        (
            Environment::Prod,
            EnvContexts {
                default: "m-tidb-prod-a-ea1-us".to_string(),
                aliases: AliasTable::from_entries(PROD_CONTEXTS),
            },
        ),
        (
            Environment::Staging,
            EnvContexts {
                default: "m-tidb-stg-a-ea1-us".to_string(),
                aliases: AliasTable::from_entries(STG_CONTEXTS),
            },
        ),
        (
            Environment::Test,
            EnvContexts {
                default: "m-tidb-test-a-ea1-us".to_string(),
                aliases: AliasTable::from_entries(TEST_CONTEXTS),
            },
        ),
    ]);

    let namespaces = BTreeMap::from([
        (Environment::Prod, AliasTable::from_entries(PROD_NAMESPACES)),
        (Environment::Staging, AliasTable::from_entries(STG_NAMESPACES)),
        (Environment::Test, AliasTable::from_entries(TEST_NAMESPACES)),
    ]);

    AliasTables::new(AliasTable::from_entries(CONTEXTS), env_contexts, namespaces)
}
