//! Raw provider JSON to `WeatherSnapshot` normalization
//!
//! A pure reshape: flatten nested condition objects, split hourly timestamps
//! to time-of-day, map forecast days to min/max/avg pairs in both units, and
//! carry holidays and first-day astronomy across. No aggregation happens
//! here; the provider already computed the daily figures.

use chrono::NaiveDate;

use domain::{
    Astronomy, CurrentConditions, DailyEntry, Holiday, HourlyEntry, Location, WeatherSnapshot,
};

use crate::client::WeatherError;
use crate::models::{ForecastResponse, Hour};

/// Convert a raw forecast response plus a holiday list into the normalized
/// domain model.
///
/// # Errors
///
/// Returns `WeatherError::ParseError` when the response carries no forecast
/// days or a day's date does not parse; these are the expected "not found"
/// shape failures.
pub fn normalize(
    forecast: &ForecastResponse,
    holidays: &[Holiday],
) -> Result<WeatherSnapshot, WeatherError> {
    let first_day = forecast
        .forecast
        .forecastday
        .first()
        .ok_or_else(|| WeatherError::ParseError("no forecast days in response".to_string()))?;

    let location = Location {
        name: forecast.location.name.clone(),
        region: forecast.location.region.clone(),
        country: forecast.location.country.clone(),
        localtime: forecast.location.localtime.clone(),
        timezone: forecast.location.tz_id.clone(),
        latitude: forecast.location.lat,
        longitude: forecast.location.lon,
    };

    let current = CurrentConditions {
        temp_c: forecast.current.temp_c,
        temp_f: forecast.current.temp_f,
        feelslike_c: forecast.current.feelslike_c,
        feelslike_f: forecast.current.feelslike_f,
        humidity: forecast.current.humidity,
        wind_kph: forecast.current.wind_kph,
        wind_mph: forecast.current.wind_mph,
        vis_km: forecast.current.vis_km,
        vis_miles: forecast.current.vis_miles,
        condition: forecast.current.condition.text.clone(),
        air_quality: forecast
            .current
            .air_quality
            .as_ref()
            .and_then(|aq| aq.us_epa_index)
            .and_then(|index| domain::AirQualityIndex::new(index).ok()),
    };

    let hourly = first_day.hour.iter().map(hourly_entry).collect();

    let daily = forecast
        .forecast
        .forecastday
        .iter()
        .map(|day| {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("invalid forecast date: {e}")))?;
            Ok(DailyEntry {
                date,
                min_c: day.day.mintemp_c,
                max_c: day.day.maxtemp_c,
                avg_c: day.day.avgtemp_c,
                min_f: day.day.mintemp_f,
                max_f: day.day.maxtemp_f,
                avg_f: day.day.avgtemp_f,
                chance_of_rain: day.day.daily_chance_of_rain,
                condition: day.day.condition.text.clone(),
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    let astronomy = Some(Astronomy {
        sunrise: first_day.astro.sunrise.clone(),
        sunset: first_day.astro.sunset.clone(),
    });

    Ok(WeatherSnapshot {
        location,
        current,
        hourly,
        daily,
        holidays: holidays.to_vec(),
        astronomy,
    })
}

/// Map one raw hour, splitting "YYYY-MM-DD HH:MM" down to "HH:MM"
fn hourly_entry(hour: &Hour) -> HourlyEntry {
    let time = hour
        .time
        .split_once(' ')
        .map_or_else(|| hour.time.clone(), |(_, t)| t.to_string());

    HourlyEntry {
        time,
        temp_c: hour.temp_c,
        temp_f: hour.temp_f,
        chance_of_rain: hour.chance_of_rain,
        condition: hour.condition.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AirQuality, Astro, Condition, Current, Day, ForecastBlock, ForecastDay, LocationBlock,
    };

    fn condition(text: &str) -> Condition {
        Condition {
            text: text.to_string(),
        }
    }

    fn fixture_day(date: &str, rain: u8) -> ForecastDay {
        let hours = (0..24)
            .map(|h| Hour {
                time: format!("{date} {h:02}:00"),
                temp_c: 10.0 + f64::from(h),
                temp_f: 50.0 + f64::from(h) * 1.8,
                chance_of_rain: rain,
                condition: condition("Light Rain"),
            })
            .collect();

        ForecastDay {
            date: date.to_string(),
            day: Day {
                mintemp_c: 8.0,
                maxtemp_c: 19.0,
                avgtemp_c: 13.5,
                mintemp_f: 46.4,
                maxtemp_f: 66.2,
                avgtemp_f: 56.3,
                daily_chance_of_rain: rain,
                condition: condition("Light Rain"),
            },
            astro: Astro {
                sunrise: "06:42 AM".to_string(),
                sunset: "08:03 PM".to_string(),
            },
            hour: hours,
        }
    }

    fn fixture_forecast(days: usize) -> ForecastResponse {
        let forecastday = (0..days)
            .map(|i| fixture_day(&format!("2026-08-{:02}", 10 + i), 40))
            .collect();

        ForecastResponse {
            location: LocationBlock {
                name: "London".to_string(),
                region: "City of London, Greater London".to_string(),
                country: "United Kingdom".to_string(),
                lat: 51.52,
                lon: -0.11,
                tz_id: "Europe/London".to_string(),
                localtime: "2026-08-10 09:30".to_string(),
            },
            current: Current {
                temp_c: 16.0,
                temp_f: 60.8,
                feelslike_c: 15.0,
                feelslike_f: 59.0,
                humidity: 77,
                wind_kph: 15.1,
                wind_mph: 9.4,
                vis_km: 10.0,
                vis_miles: 6.0,
                condition: condition("Light Rain"),
                air_quality: Some(AirQuality {
                    us_epa_index: Some(2),
                }),
            },
            forecast: ForecastBlock { forecastday },
        }
    }

    #[test]
    fn hourly_has_exactly_24_entries() {
        let snapshot = normalize(&fixture_forecast(3), &[]).unwrap();
        assert_eq!(snapshot.hourly.len(), 24);
    }

    #[test]
    fn daily_length_matches_forecastday_count() {
        for days in [1, 3, 7] {
            let snapshot = normalize(&fixture_forecast(days), &[]).unwrap();
            assert_eq!(snapshot.daily.len(), days);
        }
    }

    #[test]
    fn condition_is_flattened_to_plain_string() {
        let snapshot = normalize(&fixture_forecast(1), &[]).unwrap();
        assert_eq!(snapshot.current.condition, "Light Rain");
        assert_eq!(snapshot.hourly[0].condition, "Light Rain");
        assert_eq!(snapshot.daily[0].condition, "Light Rain");
    }

    #[test]
    fn hourly_time_is_split_to_time_of_day() {
        let snapshot = normalize(&fixture_forecast(1), &[]).unwrap();
        assert_eq!(snapshot.hourly[0].time, "00:00");
        assert_eq!(snapshot.hourly[23].time, "23:00");
    }

    #[test]
    fn daily_carries_min_max_avg_in_both_units() {
        let snapshot = normalize(&fixture_forecast(2), &[]).unwrap();
        let day = &snapshot.daily[0];
        assert!((day.min_c - 8.0).abs() < f64::EPSILON);
        assert!((day.max_c - 19.0).abs() < f64::EPSILON);
        assert!((day.avg_c - 13.5).abs() < f64::EPSILON);
        assert!((day.min_f - 46.4).abs() < f64::EPSILON);
        assert!((day.max_f - 66.2).abs() < f64::EPSILON);
        assert!((day.avg_f - 56.3).abs() < f64::EPSILON);
    }

    #[test]
    fn astronomy_comes_from_first_day() {
        let snapshot = normalize(&fixture_forecast(3), &[]).unwrap();
        let astro = snapshot.astronomy.unwrap();
        assert_eq!(astro.sunrise, "06:42 AM");
        assert_eq!(astro.sunset, "08:03 PM");
    }

    #[test]
    fn air_quality_index_is_carried_over() {
        let snapshot = normalize(&fixture_forecast(1), &[]).unwrap();
        assert_eq!(snapshot.current.air_quality.map(|a| a.value()), Some(2));
    }

    #[test]
    fn out_of_range_epa_index_is_dropped() {
        let mut forecast = fixture_forecast(1);
        forecast.current.air_quality = Some(AirQuality {
            us_epa_index: Some(9),
        });
        let snapshot = normalize(&forecast, &[]).unwrap();
        assert!(snapshot.current.air_quality.is_none());
    }

    #[test]
    fn empty_holiday_slice_yields_empty_list() {
        let snapshot = normalize(&fixture_forecast(1), &[]).unwrap();
        assert!(snapshot.holidays.is_empty());
    }

    #[test]
    fn holidays_are_carried_verbatim() {
        let holidays = vec![Holiday {
            date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
            name: "Christmas Day".to_string(),
        }];
        let snapshot = normalize(&fixture_forecast(1), &holidays).unwrap();
        assert_eq!(snapshot.holidays, holidays);
    }

    #[test]
    fn normalization_is_idempotent() {
        let forecast = fixture_forecast(3);
        let first = normalize(&forecast, &[]).unwrap();
        let second = normalize(&forecast, &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_forecast_days_is_a_parse_error() {
        let mut forecast = fixture_forecast(1);
        forecast.forecast.forecastday.clear();
        assert!(matches!(
            normalize(&forecast, &[]),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn invalid_day_date_is_a_parse_error() {
        let mut forecast = fixture_forecast(1);
        forecast.forecast.forecastday[0].date = "not-a-date".to_string();
        assert!(matches!(
            normalize(&forecast, &[]),
            Err(WeatherError::ParseError(_))
        ));
    }
}
