use serde::Serialize;
use uv_core::{City, Config, Recommendation, SkinType, SkinTypeInfo, UvReading};

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok: true, data })?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: &T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok: true, data })?);
    } else {
        println!("{}", render(data));
    }
    Ok(())
}

/// A looked-up reading with either personalized advice (when a skin type is
/// known) or the band's general guidance.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    pub reading: Option<UvReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    pub guidance: Vec<&'static str>,
}

impl Report {
    pub fn new(
        city: Option<City>,
        reading: Option<UvReading>,
        message: Option<String>,
        skin: Option<SkinType>,
        config: &Config,
    ) -> anyhow::Result<Self> {
        let recommendation = match (&reading, skin) {
            (Some(r), Some(skin)) => Some(config.engine().compute(r.uv_index, skin)?),
            _ => None,
        };

        let guidance = match (&reading, &recommendation) {
            (Some(r), None) => r.band().general_guidance().to_vec(),
            _ => Vec::new(),
        };

        Ok(Self {
            city,
            reading,
            message,
            recommendation,
            guidance,
        })
    }
}

pub fn render_city(city: &City) -> String {
    format!("{:<20} {:<15} {}", city.name, city.state, city.postcode)
}

pub fn render_reading(reading: &UvReading) -> String {
    let band = reading.band();
    let mut line = format!(
        "{:<20} {:<15} {:>5.1}  {:<10} {:<8} {}",
        reading.city,
        reading.state,
        reading.uv_index,
        band.label(),
        band.color_token(),
        reading.time_info(),
    );
    if !reading.is_ok() {
        line.push_str(&format!(" [status: {}]", reading.status));
    }
    line
}

pub fn render_skin_type(info: &SkinTypeInfo) -> String {
    format!("{}  {:<9} {:<45} {}", info.id, info.name, info.description, info.color)
}

pub fn render_recommendation(rec: &Recommendation) -> String {
    let mut out = format!(
        "UV index {:.1} ({}), skin type {}\n",
        rec.uv_index, rec.band, rec.skin_type
    );

    if rec.advisories.is_empty() {
        out.push_str("No special precautions needed.\n");
    }
    for advisory in &rec.advisories {
        out.push_str(&format!("  - {advisory}\n"));
    }
    out.push_str(&format!("Safe unprotected exposure: {} minutes", rec.safe_exposure_minutes));

    out
}

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    if let Some(city) = &report.city {
        out.push_str(&format!("{}, {} {}\n", city.name, city.state, city.postcode));
    }

    let Some(reading) = &report.reading else {
        out.push_str(report.message.as_deref().unwrap_or("No UV data found"));
        return out;
    };

    out.push_str(&format!(
        "{}: UV index {:.1} ({} UV Index)",
        reading.city,
        reading.uv_index,
        reading.band().label()
    ));
    let time_info = reading.time_info();
    if !time_info.is_empty() {
        out.push_str(&format!(", updated {time_info}"));
    }
    if let Some(distance) = reading.distance {
        out.push_str(&format!(", {distance:.2}° from query"));
    }
    out.push('\n');

    match &report.recommendation {
        Some(rec) => out.push_str(&render_recommendation(rec)),
        None => {
            out.push_str("Protection recommendations:");
            for line in &report.guidance {
                out.push_str(&format!("\n  - {line}"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uv_core::UvBand;

    fn reading(city: &str, uv_index: f64) -> UvReading {
        UvReading {
            city: city.to_string(),
            state: "QLD".to_string(),
            uv_index,
            time: "12:00 PM".to_string(),
            date: "01/12/2025".to_string(),
            ..UvReading::default()
        }
    }

    #[test]
    fn report_without_skin_uses_band_guidance() {
        let report =
            Report::new(None, Some(reading("Cairns", 9.2)), None, None, &Config::default())
                .expect("valid");

        assert!(report.recommendation.is_none());
        assert_eq!(report.guidance, UvBand::VeryHigh.general_guidance());

        let text = render_report(&report);
        assert!(text.starts_with(
            "Cairns: UV index 9.2 (Very High UV Index), updated 12:00 PM, 01/12/2025"
        ));
        assert!(text.contains("Wear UV-protective sunglasses"));
    }

    #[test]
    fn report_with_skin_is_personalized() {
        let skin = SkinType::new(1).expect("valid");
        let report =
            Report::new(None, Some(reading("Cairns", 9.2)), None, Some(skin), &Config::default())
                .expect("valid");

        let rec = report.recommendation.as_ref().expect("personalized");
        assert_eq!(rec.band, UvBand::VeryHigh);
        assert!(report.guidance.is_empty());
        assert!(render_report(&report).contains("Apply SPF 50+ sunscreen every 2 hours"));
    }

    #[test]
    fn report_without_reading_shows_message() {
        let city = City {
            name: "Geelong".into(),
            state: "VIC".into(),
            postcode: "3220".into(),
        };
        let report = Report::new(
            Some(city),
            None,
            Some("No UV index data found for Melbourne".into()),
            None,
            &Config::default(),
        )
        .expect("valid");

        assert_eq!(
            render_report(&report),
            "Geelong, VIC 3220\nNo UV index data found for Melbourne"
        );
    }

    #[test]
    fn reading_row_flags_bad_status() {
        let ok = render_reading(&reading("Emerald", 3.0));
        assert!(ok.contains("Moderate"));
        assert!(ok.contains("#2ecc71"));
        assert!(!ok.contains("status"));

        let stale = UvReading {
            status: "offline".into(),
            ..reading("Emerald", 3.0)
        };
        assert!(render_reading(&stale).ends_with("[status: offline]"));
    }

    #[test]
    fn recommendation_rendering_lists_every_advisory() {
        let rec = uv_core::compute(7.0, SkinType::new(3).expect("valid")).expect("valid");
        let text = render_recommendation(&rec);

        assert!(text.starts_with("UV index 7.0 (High), skin type 3\n"));
        assert_eq!(text.matches("\n  - ").count(), rec.advisories.len());
        assert!(text.ends_with("Safe unprotected exposure: 5 minutes"));
    }
}
