//! Bundled sample indicators. Country rows follow World Bank figures; the
//! regional aggregates (GDP in trillions of USD, population in millions) share
//! one set of region boundaries across all years.

use super::entities::{RegionalRecord, YearRecord};
use super::store::DataStore;
use super::value_objects::Region::{self, *};
use super::value_objects::Year;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub(crate) static SAMPLE_STORE: Lazy<Arc<DataStore>> = Lazy::new(|| Arc::new(build_sample_store()));

type CountryRow = (&'static str, Region, f64, f64, u64);
type RegionalRow = (Region, f64, f64);

const COUNTRY_ROWS: [(u32, [CountryRow; 6]); 7] = [
    (
        1960,
        [
            ("United States", NorthAmerica, 3007.0, 69.77, 180_671_000),
            ("China", EastAsia, 89.0, 43.47, 667_070_000),
            ("India", SouthAsia, 82.0, 41.39, 450_547_000),
            ("Germany", Europe, 2083.0, 69.26, 72_814_900),
            ("Brazil", LatinAmerica, 449.0, 54.69, 72_757_000),
            ("Nigeria", Africa, 150.0, 37.48, 45_138_458),
        ],
    ),
    (
        1970,
        [
            ("United States", NorthAmerica, 5234.0, 70.81, 205_052_000),
            ("China", EastAsia, 113.0, 58.38, 818_315_000),
            ("India", SouthAsia, 112.0, 49.26, 553_943_000),
            ("Germany", Europe, 3494.0, 70.56, 78_169_300),
            ("Brazil", LatinAmerica, 648.0, 59.69, 95_847_000),
            ("Nigeria", Africa, 221.0, 40.02, 55_569_264),
        ],
    ),
    (
        1980,
        [
            ("United States", NorthAmerica, 12575.0, 73.6, 227_224_681),
            ("China", EastAsia, 195.0, 66.84, 981_235_000),
            ("India", SouthAsia, 266.0, 55.47, 696_783_517),
            ("Germany", Europe, 10772.0, 72.98, 78_297_904),
            ("Brazil", LatinAmerica, 2247.0, 63.34, 121_286_000),
            ("Nigeria", Africa, 565.0, 44.59, 73_698_317),
        ],
    ),
    (
        1990,
        [
            ("United States", NorthAmerica, 23914.0, 75.19, 249_622_814),
            ("China", EastAsia, 349.0, 69.32, 1_135_185_000),
            ("India", SouthAsia, 367.0, 58.60, 873_277_798),
            ("Germany", Europe, 22270.0, 75.25, 79_433_029),
            ("Brazil", LatinAmerica, 3087.0, 66.60, 149_650_281),
            ("Nigeria", Africa, 546.0, 45.89, 95_617_345),
        ],
    ),
    (
        2000,
        [
            ("United States", NorthAmerica, 36450.0, 76.64, 282_162_411),
            ("China", EastAsia, 959.0, 71.72, 1_262_645_000),
            ("India", SouthAsia, 442.0, 62.90, 1_056_575_549),
            ("Germany", Europe, 25169.0, 78.24, 82_187_909),
            ("Brazil", LatinAmerica, 3749.0, 70.48, 174_504_000),
            ("Nigeria", Africa, 587.0, 46.49, 122_851_984),
        ],
    ),
    (
        2010,
        [
            ("United States", NorthAmerica, 48467.0, 78.54, 309_321_666),
            ("China", EastAsia, 4550.0, 75.23, 1_337_705_000),
            ("India", SouthAsia, 1358.0, 67.14, 1_234_281_170),
            ("Germany", Europe, 41723.0, 79.99, 81_776_930),
            ("Brazil", LatinAmerica, 11315.0, 73.62, 196_353_492),
            ("Nigeria", Africa, 2249.0, 51.98, 158_503_197),
        ],
    ),
    (
        2020,
        [
            ("United States", NorthAmerica, 63543.0, 77.28, 331_449_281),
            ("China", EastAsia, 10408.0, 77.47, 1_402_385_000),
            ("India", SouthAsia, 1965.0, 69.73, 1_380_004_385),
            ("Germany", Europe, 46445.0, 80.94, 83_132_799),
            ("Brazil", LatinAmerica, 6796.0, 75.92, 212_559_409),
            ("Nigeria", Africa, 2097.0, 54.69, 206_139_587),
        ],
    ),
];

const REGIONAL_ROWS: [(u32, [RegionalRow; 6]); 7] = [
    (
        1960,
        [
            (NorthAmerica, 0.62, 270.0),
            (Europe, 0.36, 605.0),
            (EastAsia, 0.12, 900.0),
            (SouthAsia, 0.05, 572.0),
            (Africa, 0.03, 283.0),
            (LatinAmerica, 0.07, 220.0),
        ],
    ),
    (
        1970,
        [
            (NorthAmerica, 1.22, 310.0),
            (Europe, 0.82, 655.0),
            (EastAsia, 0.25, 1090.0),
            (SouthAsia, 0.08, 711.0),
            (Africa, 0.06, 366.0),
            (LatinAmerica, 0.17, 287.0),
        ],
    ),
    (
        1980,
        [
            (NorthAmerica, 3.15, 360.0),
            (Europe, 3.37, 690.0),
            (EastAsia, 1.2, 1250.0),
            (SouthAsia, 0.22, 903.0),
            (Africa, 0.3, 480.0),
            (LatinAmerica, 0.76, 362.0),
        ],
    ),
    (
        1990,
        [
            (NorthAmerica, 6.8, 420.0),
            (Europe, 7.96, 720.0),
            (EastAsia, 3.4, 1420.0),
            (SouthAsia, 0.41, 1129.0),
            (Africa, 0.45, 635.0),
            (LatinAmerica, 1.16, 443.0),
        ],
    ),
    (
        2000,
        [
            (NorthAmerica, 11.6, 490.0),
            (Europe, 9.48, 727.0),
            (EastAsia, 6.2, 1560.0),
            (SouthAsia, 0.62, 1390.0),
            (Africa, 0.66, 818.0),
            (LatinAmerica, 2.24, 523.0),
        ],
    ),
    (
        2010,
        [
            (NorthAmerica, 17.1, 540.0),
            (Europe, 17.5, 738.0),
            (EastAsia, 12.6, 1630.0),
            (SouthAsia, 2.1, 1650.0),
            (Africa, 1.96, 1040.0),
            (LatinAmerica, 4.3, 593.0),
        ],
    ),
    (
        2020,
        [
            (NorthAmerica, 24.8, 579.0),
            (Europe, 19.2, 748.0),
            (EastAsia, 18.5, 1678.0),
            (SouthAsia, 3.5, 1856.0),
            (Africa, 2.6, 1341.0),
            (LatinAmerica, 4.9, 653.0),
        ],
    ),
];

fn build_sample_store() -> DataStore {
    let builder = COUNTRY_ROWS.iter().fold(DataStore::builder(), |builder, (year, rows)| {
        let records = rows
            .iter()
            .map(|&(country, region, gdp, life, population)| {
                YearRecord::new(country, region, gdp, life, population)
            })
            .collect();
        builder.with_year(Year::new(*year), records)
    });

    REGIONAL_ROWS
        .iter()
        .fold(builder, |builder, (year, rows)| {
            let records = rows
                .iter()
                .map(|&(region, gdp, population)| RegionalRecord::new(region, gdp, population))
                .collect();
            builder.with_regional_year(Year::new(*year), records)
        })
        .build()
}
