//! The value format catalog

use std::sync::Arc;

use serde::Serialize;
use unitfmt_formats::{
    binary_prefix, boolean, currency, fixed_unit, scaled_units, si_prefix, simple_count, ChronoAdapter,
    ClockInput, DateTimeAdapter, DateTimeFormatter, Formatter, Interval, TimeUnit, ISO_PATTERN,
    ISO_TIME_PATTERN, SYSTEM_MS_PATTERN, SYSTEM_PATTERN, US_PATTERN, US_TIME_PATTERN,
};

use crate::RegistryConfig;

/// One selectable format
#[derive(Debug, Clone, Serialize)]
pub struct FormatEntry {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub formatter: Arc<Formatter>,
}

impl FormatEntry {
    pub fn new(name: &str, id: &str, formatter: Formatter) -> Self {
        FormatEntry { id: id.to_string(), name: name.to_string(), formatter: Arc::new(formatter) }
    }
}

/// A named, ordered group of formats
#[derive(Debug, Clone, Serialize)]
pub struct FormatCategory {
    pub name: String,
    pub formats: Vec<FormatEntry>,
}

fn category(name: &str, formats: Vec<FormatEntry>) -> FormatCategory {
    FormatCategory { name: name.to_string(), formats }
}

fn entry(name: &str, id: &str, formatter: Formatter) -> FormatEntry {
    FormatEntry::new(name, id, formatter)
}

fn fixed(unit: &str) -> Formatter {
    fixed_unit(unit, false)
}

/// Date/time formatters sharing one adapter and the configured patterns
struct DateFormats<'a> {
    adapter: Arc<dyn DateTimeAdapter>,
    config: &'a RegistryConfig,
}

impl DateFormats<'_> {
    fn pattern(&self, pattern: &str) -> Formatter {
        Formatter::DateTime(DateTimeFormatter::pattern(pattern, self.adapter.clone()))
    }

    fn pattern_or_today(&self, pattern: &str, today: &str) -> Formatter {
        Formatter::DateTime(DateTimeFormatter::pattern_or_today(pattern, today, self.adapter.clone()))
    }

    fn iso(&self) -> Formatter {
        self.pattern(ISO_PATTERN)
    }

    fn iso_no_date_if_today(&self) -> Formatter {
        self.pattern_or_today(ISO_PATTERN, ISO_TIME_PATTERN)
    }

    fn us(&self) -> Formatter {
        self.pattern(US_PATTERN)
    }

    fn us_no_date_if_today(&self) -> Formatter {
        self.pattern_or_today(US_PATTERN, US_TIME_PATTERN)
    }

    fn local(&self) -> Formatter {
        self.pattern(&self.config.local_format)
    }

    fn local_no_date_if_today(&self) -> Formatter {
        self.pattern_or_today(&self.config.local_format, &self.config.local_time_format)
    }

    fn system(&self) -> Formatter {
        if self.config.show_ms {
            self.pattern(SYSTEM_MS_PATTERN)
        } else {
            self.pattern(SYSTEM_PATTERN)
        }
    }

    fn from_now(&self) -> Formatter {
        Formatter::DateTime(DateTimeFormatter::from_now(self.adapter.clone()))
    }
}

/// The full catalog in display order, UTC dates.
///
/// `scalable == false` pins every SI unit that honours it to its own tier.
pub fn build_categories(scalable: bool) -> Vec<FormatCategory> {
    let config = RegistryConfig::default().with_scalable(scalable);
    build_categories_with(&config, Arc::new(ChronoAdapter::default()))
}

/// The full catalog for `config`, rendering dates through `adapter`
pub fn build_categories_with(
    config: &RegistryConfig,
    adapter: Arc<dyn DateTimeAdapter>,
) -> Vec<FormatCategory> {
    let scalable = config.scalable;
    let si = |unit: &str, offset: i32| si_prefix(unit, offset, scalable);
    let dates = DateFormats { adapter, config };

    vec![
        category("Misc", vec![
            entry("Number", "none", fixed("")),
            entry("String", "string", Formatter::Text),
            entry("short", "short", Formatter::Scaled(scaled_units(1000.0, &["", " K", " Mil", " Bil", " Tri", " Quadr", " Quint", " Sext", " Sept"], 0))),
            entry("Percent (0-100)", "percent", Formatter::Percent),
            entry("Percent (0.0-1.0)", "percentunit", Formatter::PercentUnit),
            entry("Humidity (%H)", "humidity", fixed("%H")),
            entry("Decibel", "dB", fixed("dB")),
            entry("Candela (cd)", "candela", si_prefix("cd", 0, true)),
            entry("Hexadecimal (0x)", "hex0x", Formatter::Hex0x),
            entry("Hexadecimal", "hex", Formatter::Hex),
            entry("Scientific notation", "sci", Formatter::Sci),
            entry("Locale format", "locale", Formatter::Locale),
            entry("Pixels", "pixel", fixed("px")),
        ]),
        category("Acceleration", vec![
            entry("Meters/sec²", "accMS2", fixed("m/sec²")),
            entry("Feet/sec²", "accFS2", fixed("f/sec²")),
            entry("G unit", "accG", fixed("g")),
        ]),
        category("Angle", vec![
            entry("Degrees (°)", "degree", fixed("°")),
            entry("Radians", "radian", fixed("rad")),
            entry("Gradian", "grad", fixed("grad")),
            entry("Arc Minutes", "arcmin", fixed("arcmin")),
            entry("Arc Seconds", "arcsec", fixed("arcsec")),
        ]),
        category("Area", vec![
            entry("Square Meters (m²)", "areaM2", fixed("m²")),
            entry("Square Feet (ft²)", "areaF2", fixed("ft²")),
            entry("Square Miles (mi²)", "areaMI2", fixed("mi²")),
            entry("Acres (ac)", "acres", fixed("ac")),
            entry("Hectares (ha)", "hectares", fixed("ha")),
        ]),
        category("Computation", vec![
            entry("FLOP/s", "flops", si("FLOPS", 0)),
            entry("MFLOP/s", "mflops", si("FLOPS", 2)),
            entry("GFLOP/s", "gflops", si("FLOPS", 3)),
            entry("TFLOP/s", "tflops", si("FLOPS", 4)),
            entry("PFLOP/s", "pflops", si("FLOPS", 5)),
            entry("EFLOP/s", "eflops", si("FLOPS", 6)),
            entry("ZFLOP/s", "zflops", si("FLOPS", 7)),
            entry("YFLOP/s", "yflops", si("FLOPS", 8)),
        ]),
        category("Concentration", vec![
            entry("parts-per-million (ppm)", "ppm", fixed("ppm")),
            entry("parts-per-billion (ppb)", "conppb", fixed("ppb")),
            entry("nanogram per cubic meter (ng/m³)", "conngm3", fixed("ng/m³")),
            entry("nanogram per normal cubic meter (ng/Nm³)", "conngNm3", fixed("ng/Nm³")),
            entry("microgram per cubic meter (μg/m³)", "conμgm3", fixed("μg/m³")),
            entry("microgram per normal cubic meter (μg/Nm³)", "conμgNm3", fixed("μg/Nm³")),
            entry("milligram per cubic meter (mg/m³)", "conmgm3", fixed("mg/m³")),
            entry("milligram per normal cubic meter (mg/Nm³)", "conmgNm3", fixed("mg/Nm³")),
            entry("gram per cubic meter (g/m³)", "congm3", fixed("g/m³")),
            entry("gram per normal cubic meter (g/Nm³)", "congNm3", fixed("g/Nm³")),
            entry("milligrams per decilitre (mg/dL)", "conmgdL", fixed("mg/dL")),
            entry("millimoles per litre (mmol/L)", "conmmolL", fixed("mmol/L")),
        ]),
        category("Currency", vec![
            entry("Dollars ($)", "currencyUSD", currency("$", false)),
            entry("Pounds (£)", "currencyGBP", currency("£", false)),
            entry("Euro (€)", "currencyEUR", currency("€", false)),
            entry("Yen (¥)", "currencyJPY", currency("¥", false)),
            entry("Rubles (₽)", "currencyRUB", currency("₽", false)),
            entry("Hryvnias (₴)", "currencyUAH", currency("₴", false)),
            entry("Real (R$)", "currencyBRL", currency("R$", false)),
            entry("Danish Krone (kr)", "currencyDKK", currency("kr", true)),
            entry("Icelandic Króna (kr)", "currencyISK", currency("kr", true)),
            entry("Norwegian Krone (kr)", "currencyNOK", currency("kr", true)),
            entry("Swedish Krona (kr)", "currencySEK", currency("kr", true)),
            entry("Czech koruna (czk)", "currencyCZK", currency("czk", false)),
            entry("Swiss franc (CHF)", "currencyCHF", currency("CHF", false)),
            entry("Polish Złoty (PLN)", "currencyPLN", currency("PLN", false)),
            entry("Bitcoin (฿)", "currencyBTC", currency("฿", false)),
            entry("Milli Bitcoin (฿)", "currencymBTC", currency("mBTC", false)),
            entry("Micro Bitcoin (฿)", "currencyμBTC", currency("μBTC", false)),
            entry("South African Rand (R)", "currencyZAR", currency("R", false)),
            entry("Indian Rupee (₹)", "currencyINR", currency("₹", false)),
            entry("South Korean Won (₩)", "currencyKRW", currency("₩", false)),
            entry("Indonesian Rupiah (Rp)", "currencyIDR", currency("Rp", false)),
            entry("Philippine Peso (PHP)", "currencyPHP", currency("PHP", false)),
            entry("Vietnamese Dong (VND)", "currencyVND", currency("đ", true)),
            entry("Turkish Lira (₺)", "currencyTRY", currency("₺", true)),
            entry("Malaysian Ringgit (RM)", "currencyMYR", currency("RM", false)),
            entry("CFP franc (XPF)", "currencyXPF", currency("XPF", false)),
            entry("Bulgarian Lev (BGN)", "currencyBGN", currency("BGN", false)),
        ]),
        category("Data", vec![
            entry("bytes(IEC)", "bytes", binary_prefix("B", None)),
            entry("bytes(SI)", "decbytes", si("B", 0)),
            entry("bits(IEC)", "bits", binary_prefix("b", None)),
            entry("bits(SI)", "decbits", si("b", 0)),
            entry("kibibytes", "kbytes", binary_prefix("B", Some(1))),
            entry("kilobytes", "deckbytes", si("B", 1)),
            entry("mebibytes", "mbytes", binary_prefix("B", Some(2))),
            entry("megabytes", "decmbytes", si("B", 2)),
            entry("gibibytes", "gbytes", binary_prefix("B", Some(3))),
            entry("gigabytes", "decgbytes", si("B", 3)),
            entry("tebibytes", "tbytes", binary_prefix("B", Some(4))),
            entry("terabytes", "dectbytes", si("B", 4)),
            entry("pebibytes", "pbytes", binary_prefix("B", Some(5))),
            entry("petabytes", "decpbytes", si("B", 5)),
        ]),
        category("Data rate", vec![
            entry("packets/sec", "pps", si("p/s", 0)),
            entry("bytes/sec(IEC)", "binBps", binary_prefix("B/s", None)),
            entry("bytes/sec(SI)", "Bps", si("B/s", 0)),
            entry("bits/sec(IEC)", "binbps", binary_prefix("b/s", None)),
            entry("bits/sec(SI)", "bps", si("b/s", 0)),
            entry("kibibytes/sec", "KiBs", binary_prefix("B/s", Some(1))),
            entry("kibibits/sec", "Kibits", binary_prefix("b/s", Some(1))),
            entry("kilobytes/sec", "KBs", si("B/s", 1)),
            entry("kilobits/sec", "Kbits", si("b/s", 1)),
            entry("mebibytes/sec", "MiBs", binary_prefix("B/s", Some(2))),
            entry("mebibits/sec", "Mibits", binary_prefix("b/s", Some(2))),
            entry("megabytes/sec", "MBs", si("B/s", 2)),
            entry("megabits/sec", "Mbits", si("b/s", 2)),
            entry("gibibytes/sec", "GiBs", binary_prefix("B/s", Some(3))),
            entry("gibibits/sec", "Gibits", binary_prefix("b/s", Some(3))),
            entry("gigabytes/sec", "GBs", si("B/s", 3)),
            entry("gigabits/sec", "Gbits", si("b/s", 3)),
            entry("tebibytes/sec", "TiBs", binary_prefix("B/s", Some(4))),
            entry("tebibits/sec", "Tibits", binary_prefix("b/s", Some(4))),
            entry("terabytes/sec", "TBs", si("B/s", 4)),
            entry("terabits/sec", "Tbits", si("b/s", 4)),
            entry("pebibytes/sec", "PiBs", binary_prefix("B/s", Some(5))),
            entry("pebibits/sec", "Pibits", binary_prefix("b/s", Some(5))),
            entry("petabytes/sec", "PBs", si("B/s", 5)),
            entry("petabits/sec", "Pbits", si("b/s", 5)),
        ]),
        category("Date & time", vec![
            entry("Datetime ISO", "dateTimeAsIso", dates.iso()),
            entry("Datetime ISO (No date if today)", "dateTimeAsIsoNoDateIfToday", dates.iso_no_date_if_today()),
            entry("Datetime US", "dateTimeAsUS", dates.us()),
            entry("Datetime US (No date if today)", "dateTimeAsUSNoDateIfToday", dates.us_no_date_if_today()),
            entry("Datetime local", "dateTimeAsLocal", dates.local()),
            entry("Datetime local (No date if today)", "dateTimeAsLocalNoDateIfToday", dates.local_no_date_if_today()),
            entry("Datetime default", "dateTimeAsSystem", dates.system()),
            entry("From Now", "dateTimeFromNow", dates.from_now()),
        ]),
        category("Energy", vec![
            entry("Watt (W)", "watt", si("W", 0)),
            entry("Kilowatt (kW)", "kwatt", si("W", 1)),
            entry("Megawatt (MW)", "megwatt", si("W", 2)),
            entry("Gigawatt (GW)", "gwatt", si("W", 3)),
            entry("Milliwatt (mW)", "mwatt", si("W", -1)),
            entry("Watt per square meter (W/m²)", "Wm2", fixed("W/m²")),
            entry("Volt-Ampere (VA)", "voltamp", si("VA", 0)),
            entry("Kilovolt-Ampere (kVA)", "kvoltamp", si("VA", 1)),
            entry("Volt-Ampere reactive (VAr)", "voltampreact", si("VAr", 0)),
            entry("Kilovolt-Ampere reactive (kVAr)", "kvoltampreact", si("VAr", 1)),
            entry("Watt-hour (Wh)", "watth", si_prefix("Wh", 0, true)),
            entry("Watt-hour per Kilogram (Wh/kg)", "watthperkg", si("Wh/kg", 0)),
            entry("Kilowatt-hour (kWh)", "kwatth", si("Wh", 1)),
            entry("Kilowatt-min (kWm)", "kwattm", si("W-Min", 1)),
            entry("Megawatt-hour (MWh)", "mwatth", si("Wh", 2)),
            entry("Ampere-hour (Ah)", "amph", si("Ah", 0)),
            entry("Kiloampere-hour (kAh)", "kamph", si("Ah", 1)),
            entry("Milliampere-hour (mAh)", "mamph", si("Ah", -1)),
            entry("Joule (J)", "joule", si("J", 0)),
            entry("Electron volt (eV)", "ev", si("eV", 0)),
            entry("Ampere (A)", "amp", si("A", 0)),
            entry("Kiloampere (kA)", "kamp", si("A", 1)),
            entry("Milliampere (mA)", "mamp", si("A", -1)),
            entry("Volt (V)", "volt", si("V", 0)),
            entry("Kilovolt (kV)", "kvolt", si("V", 1)),
            entry("Millivolt (mV)", "mvolt", si("V", -1)),
            entry("Decibel-milliwatt (dBm)", "dBm", si("dBm", 0)),
            entry("Milliohm (mΩ)", "mohm", si("Ω", -1)),
            entry("Ohm (Ω)", "ohm", si("Ω", 0)),
            entry("Kiloohm (kΩ)", "kohm", si("Ω", 1)),
            entry("Megaohm (MΩ)", "Mohm", si("Ω", 2)),
            entry("Farad (F)", "farad", si("F", 0)),
            entry("Microfarad (µF)", "µfarad", si("F", -2)),
            entry("Nanofarad (nF)", "nfarad", si("F", -3)),
            entry("Picofarad (pF)", "pfarad", si("F", -4)),
            entry("Femtofarad (fF)", "ffarad", si("F", -5)),
            entry("Henry (H)", "henry", si("H", 0)),
            entry("Millihenry (mH)", "mhenry", si("H", -1)),
            entry("Microhenry (µH)", "µhenry", si("H", -2)),
            entry("Lumens (Lm)", "lumens", si("Lm", 0)),
        ]),
        category("Flow", vec![
            entry("Gallons/min (gpm)", "flowgpm", fixed("gpm")),
            entry("Cubic meters/sec (cms)", "flowcms", fixed("cms")),
            entry("Cubic feet/sec (cfs)", "flowcfs", fixed("cfs")),
            entry("Cubic feet/min (cfm)", "flowcfm", fixed("cfm")),
            entry("Litre/hour", "litreh", fixed("L/h")),
            entry("Litre/min (L/min)", "flowlpm", fixed("L/min")),
            entry("milliLitre/min (mL/min)", "flowmlpm", fixed("mL/min")),
            entry("Lux (lx)", "lux", fixed("lux")),
        ]),
        category("Force", vec![
            entry("Newton-meters (Nm)", "forceNm", si("Nm", 0)),
            entry("Kilonewton-meters (kNm)", "forcekNm", si("Nm", 1)),
            entry("Newtons (N)", "forceN", si("N", 0)),
            entry("Kilonewtons (kN)", "forcekN", si("N", 1)),
        ]),
        category("Hash rate", vec![
            entry("hashes/sec", "Hs", si("H/s", 0)),
            entry("kilohashes/sec", "KHs", si("H/s", 1)),
            entry("megahashes/sec", "MHs", si("H/s", 2)),
            entry("gigahashes/sec", "GHs", si("H/s", 3)),
            entry("terahashes/sec", "THs", si("H/s", 4)),
            entry("petahashes/sec", "PHs", si("H/s", 5)),
            entry("exahashes/sec", "EHs", si("H/s", 6)),
        ]),
        category("Mass", vec![
            entry("milligram (mg)", "massmg", si("g", -1)),
            entry("gram (g)", "massg", si("g", 0)),
            entry("pound (lb)", "masslb", fixed("lb")),
            entry("kilogram (kg)", "masskg", si("g", 1)),
            entry("metric ton (t)", "masst", fixed("t")),
        ]),
        category("Length", vec![
            entry("millimeter (mm)", "lengthmm", si("m", -1)),
            entry("inch (in)", "lengthin", fixed("in")),
            entry("feet (ft)", "lengthft", fixed("ft")),
            entry("meter (m)", "lengthm", si("m", 0)),
            entry("kilometer (km)", "lengthkm", si("m", 1)),
            entry("mile (mi)", "lengthmi", fixed("mi")),
        ]),
        category("Pressure", vec![
            entry("Millibars", "pressurembar", si("bar", -1)),
            entry("Bars", "pressurebar", si("bar", 0)),
            entry("Kilobars", "pressurekbar", si("bar", 1)),
            entry("Pascals", "pressurepa", si("Pa", 0)),
            entry("Hectopascals", "pressurehpa", fixed("hPa")),
            entry("Kilopascals", "pressurekpa", fixed("kPa")),
            entry("Inches of mercury", "pressurehg", fixed("\"Hg")),
            entry("PSI", "pressurepsi", Formatter::Scaled(scaled_units(1000.0, &["psi", "ksi", "Mpsi"], 0))),
        ]),
        category("Radiation", vec![
            entry("Becquerel (Bq)", "radbq", si("Bq", 0)),
            entry("curie (Ci)", "radci", si("Ci", 0)),
            entry("Gray (Gy)", "radgy", si("Gy", 0)),
            entry("rad", "radrad", si("rad", 0)),
            entry("Sievert (Sv)", "radsv", si("Sv", 0)),
            entry("milliSievert (mSv)", "radmsv", si("Sv", -1)),
            entry("microSievert (µSv)", "radusv", si("Sv", -2)),
            entry("rem", "radrem", si("rem", 0)),
            entry("Exposure (C/kg)", "radexpckg", si("C/kg", 0)),
            entry("roentgen (R)", "radr", si("R", 0)),
            entry("Sievert/hour (Sv/h)", "radsvh", si("Sv/h", 0)),
            entry("milliSievert/hour (mSv/h)", "radmsvh", si("Sv/h", -1)),
            entry("microSievert/hour (µSv/h)", "radusvh", si("Sv/h", -2)),
        ]),
        category("Rotational Speed", vec![
            entry("Revolutions per minute (rpm)", "rotrpm", fixed("rpm")),
            entry("Hertz (Hz)", "rothz", si("Hz", 0)),
            entry("Kilohertz (kHz)", "rotkhz", si("Hz", 1)),
            entry("Megahertz (MHz)", "rotmhz", si("Hz", 2)),
            entry("Gigahertz (GHz)", "rotghz", si("Hz", 3)),
            entry("Radians per second (rad/s)", "rotrads", fixed("rad/s")),
            entry("Degrees per second (°/s)", "rotdegs", fixed("°/s")),
        ]),
        category("Temperature", vec![
            entry("Celsius (°C)", "celsius", fixed("°C")),
            entry("Fahrenheit (°F)", "fahrenheit", fixed("°F")),
            entry("Kelvin (K)", "kelvin", fixed("K")),
        ]),
        category("Time", vec![
            entry("Hertz (1/s)", "hertz", si("Hz", 0)),
            entry("nanoseconds (ns)", "ns", Formatter::Time(TimeUnit::Nanoseconds)),
            entry("microseconds (µs)", "µs", Formatter::Time(TimeUnit::Microseconds)),
            entry("milliseconds (ms)", "ms", Formatter::Time(TimeUnit::Milliseconds)),
            entry("seconds (s)", "s", Formatter::Time(TimeUnit::Seconds)),
            entry("minutes (m)", "m", Formatter::Time(TimeUnit::Minutes)),
            entry("hours (h)", "h", Formatter::Time(TimeUnit::Hours)),
            entry("days (d)", "d", Formatter::Time(TimeUnit::Days)),
            entry("duration (ms)", "dtdurationms", Formatter::Duration(Interval::Millisecond)),
            entry("duration (s)", "dtdurations", Formatter::Duration(Interval::Second)),
            entry("duration (hh:mm:ss)", "dthms", Formatter::DurationHms),
            entry("duration (d hh:mm:ss)", "dtdhms", Formatter::DurationDhms),
            entry("Timeticks (s/100)", "timeticks", Formatter::TimeTicks),
            entry("clock (ms)", "clockms", Formatter::Clock(ClockInput::Milliseconds)),
            entry("clock (s)", "clocks", Formatter::Clock(ClockInput::Seconds)),
        ]),
        category("Throughput", vec![
            entry("counts/sec (cps)", "cps", simple_count("c/s")),
            entry("ops/sec (ops)", "ops", simple_count("ops/s")),
            entry("requests/sec (rps)", "reqps", simple_count("req/s")),
            entry("reads/sec (rps)", "rps", simple_count("rd/s")),
            entry("writes/sec (wps)", "wps", simple_count("wr/s")),
            entry("I/O ops/sec (iops)", "iops", simple_count("io/s")),
            entry("events/sec (eps)", "eps", simple_count("evt/s")),
            entry("messages/sec (mps)", "mps", simple_count("msg/s")),
            entry("records/sec (rps)", "recps", simple_count("rec/s")),
            entry("rows/sec (rps)", "rowsps", simple_count("rows/s")),
            entry("counts/min (cpm)", "cpm", simple_count("c/m")),
            entry("ops/min (opm)", "opm", simple_count("ops/m")),
            entry("requests/min (rpm)", "reqpm", simple_count("req/m")),
            entry("reads/min (rpm)", "rpm", simple_count("rd/m")),
            entry("writes/min (wpm)", "wpm", simple_count("wr/m")),
            entry("events/min (epm)", "epm", simple_count("evts/m")),
            entry("messages/min (mpm)", "mpm", simple_count("msgs/m")),
            entry("records/min (rpm)", "recpm", simple_count("rec/m")),
            entry("rows/min (rpm)", "rowspm", simple_count("rows/m")),
        ]),
        category("Velocity", vec![
            entry("meters/second (m/s)", "velocityms", fixed("m/s")),
            entry("kilometers/hour (km/h)", "velocitykmh", fixed("km/h")),
            entry("miles/hour (mph)", "velocitymph", fixed("mph")),
            entry("knot (kn)", "velocityknot", fixed("kn")),
        ]),
        category("Volume", vec![
            entry("millilitre (mL)", "mlitre", si("L", -1)),
            entry("litre (L)", "litre", si("L", 0)),
            entry("cubic meter", "m3", fixed("m³")),
            entry("Normal cubic meter", "Nm3", fixed("Nm³")),
            entry("cubic decimeter", "dm3", fixed("dm³")),
            entry("gallons", "gallons", fixed("gal")),
        ]),
        category("Boolean", vec![
            entry("True / False", "bool", boolean("True", "False")),
            entry("Yes / No", "bool_yes_no", boolean("Yes", "No")),
            entry("On / Off", "bool_on_off", boolean("On", "Off")),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use unitfmt_formats::{Clock, Zone};

    fn find<'a>(categories: &'a [FormatCategory], id: &str) -> &'a Formatter {
        categories
            .iter()
            .flat_map(|c| c.formats.iter())
            .find(|e| e.id == id)
            .map(|e| e.formatter.as_ref())
            .unwrap_or_else(|| panic!("missing {}", id))
    }

    #[test]
    fn test_catalog_shape() {
        let categories = build_categories(true);
        assert_eq!(categories.len(), 25);
        assert_eq!(categories[0].name, "Misc");
        assert_eq!(categories[0].formats[0].id, "none");
        assert_eq!(categories.last().unwrap().name, "Boolean");

        let total: usize = categories.iter().map(|c| c.formats.len()).sum();
        assert_eq!(total, 268);
    }

    #[test]
    fn test_ids_globally_unique() {
        let mut seen = HashSet::new();
        for entry in build_categories(true).iter().flat_map(|c| c.formats.iter()) {
            assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn test_category_names_unique() {
        let categories = build_categories(false);
        let names: HashSet<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let ids = |cats: Vec<FormatCategory>| -> Vec<String> {
            cats.into_iter().flat_map(|c| c.formats.into_iter().map(|e| e.id)).collect()
        };
        assert_eq!(ids(build_categories(true)), ids(build_categories(true)));
        assert_eq!(ids(build_categories(true)), ids(build_categories(false)));
    }

    #[test]
    fn test_data_formats() {
        let cats = build_categories(true);
        assert_eq!(find(&cats, "decbytes").format(1500.0, Some(2), None).to_string(), "1.50 kB");

        let v = find(&cats, "bytes").format(1024.0, None, None);
        assert_eq!((v.text.as_str(), v.suffix_str()), ("1", " KiB"));

        let v = find(&cats, "gbytes").format(1073741824.0, None, None);
        assert_eq!((v.text.as_str(), v.suffix_str()), ("1", " GiB"));

        assert_eq!(find(&cats, "Mbits").format(1500.0, Some(1), None).to_string(), "1.5 Gb/s");
    }

    #[test]
    fn test_not_scalable_pins_tier() {
        let cats = build_categories(false);
        assert_eq!(find(&cats, "decmbytes").format(123456.0, Some(0), None).to_string(), "123456 MB");
        assert_eq!(find(&cats, "watt").format(5000.0, None, None).to_string(), "5000 W");
        // Watt-hour and candela always scale
        assert_eq!(find(&cats, "watth").format(5000.0, None, None).to_string(), "5 kWh");
    }

    #[test]
    fn test_boolean_and_currency() {
        let cats = build_categories(true);
        let yes_no = find(&cats, "bool_yes_no");
        assert_eq!(yes_no.format(0.0, None, None).text, "No");
        assert_eq!(yes_no.format(1.0, None, None).text, "Yes");
        assert_eq!(yes_no.format(f64::NAN, None, None).text, "No");

        assert_eq!(find(&cats, "currencySEK").format(2500.0, Some(1), None).to_string(), "2.5Kkr");
        assert_eq!(find(&cats, "currencyEUR").format(-12.0, None, None).to_string(), "-€12");
    }

    #[test]
    fn test_misc_short_and_psi() {
        let cats = build_categories(true);
        assert_eq!(find(&cats, "short").format(2_500_000.0, Some(1), None).to_string(), "2.5 Mil");
        assert_eq!(find(&cats, "pressurepsi").format(2500.0, Some(1), None).to_string(), "2.5ksi");
        assert_eq!(find(&cats, "none").format(3.14159, Some(2), None).to_string(), "3.14");
    }

    #[test]
    fn test_date_formats_follow_config() {
        let now = chrono::DateTime::from_timestamp(1_710_072_000, 0).unwrap(); // 2024-03-10 12:00:00Z
        let adapter = Arc::new(ChronoAdapter::new(Zone::Utc).with_clock(Clock::Fixed(now)));
        let config = RegistryConfig::default()
            .with_show_ms(true)
            .with_local_format("%d.%m.%Y %H:%M", "%H:%M");
        let cats = build_categories_with(&config, adapter);

        let t = 1_710_072_000_000.0 - 3_600_000.0 + 250.0;
        assert_eq!(find(&cats, "dateTimeAsSystem").format(t, None, None).text, "2024-03-10 11:00:00.250");
        assert_eq!(find(&cats, "dateTimeAsLocalNoDateIfToday").format(t, None, None).text, "11:00");
        assert_eq!(find(&cats, "dateTimeAsLocal").format(t, None, None).text, "10.03.2024 11:00");
        assert_eq!(find(&cats, "dateTimeFromNow").format(t, None, None).text, "an hour ago");
    }
}
