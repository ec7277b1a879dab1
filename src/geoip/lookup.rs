//! IP address lookup functions.
//!
//! This module looks up addresses in the City and ASN databases and converts
//! the raw MaxMind records into [`GeoRecord`] and [`AsnRecord`].

use std::net::IpAddr;

use maxminddb::geoip2::{self, Names};

use super::types::GeoIpDatabase;
use crate::config::{NAME_LOCALE, UNKNOWN_PROVINCE};
use crate::error_handling::LookupError;
use crate::lookup::{AsnRecord, GeoRecord};

/// Source of city-level location data.
pub trait GeoSource: Send + Sync {
    /// Looks up the location of `ip`.
    ///
    /// # Errors
    ///
    /// `LookupError::Geo` when the address is not in the source or the source
    /// cannot be read.
    fn lookup_geo(&self, ip: IpAddr) -> Result<GeoRecord, LookupError>;
}

/// Source of autonomous-system attribution data.
pub trait AsnSource: Send + Sync {
    /// Looks up the network operator of `ip`.
    ///
    /// # Errors
    ///
    /// `LookupError::Asn` when the address is not in the source or the source
    /// cannot be read.
    fn lookup_asn(&self, ip: IpAddr) -> Result<AsnRecord, LookupError>;
}

impl GeoSource for GeoIpDatabase {
    fn lookup_geo(&self, ip: IpAddr) -> Result<GeoRecord, LookupError> {
        let city_lookup = self.reader.lookup(ip).map_err(|e| {
            log::debug!("City lookup for {ip} failed: {e}");
            LookupError::Geo
        })?;

        // An address outside every network in the tree is a miss, not a read error
        if !city_lookup.has_data() {
            log::debug!("{ip} not found in City database");
            return Err(LookupError::Geo);
        }

        match city_lookup.decode::<geoip2::City>() {
            Ok(Some(city)) => Ok(geo_record_from_city(&city)),
            Ok(None) => Err(LookupError::Geo),
            Err(e) => {
                log::debug!("Failed to decode City record for {ip}: {e}");
                Err(LookupError::Geo)
            }
        }
    }
}

impl AsnSource for GeoIpDatabase {
    fn lookup_asn(&self, ip: IpAddr) -> Result<AsnRecord, LookupError> {
        let asn_lookup = self.reader.lookup(ip).map_err(|e| {
            log::debug!("ASN lookup for {ip} failed: {e}");
            LookupError::Asn
        })?;

        if !asn_lookup.has_data() {
            log::debug!("{ip} not found in ASN database");
            return Err(LookupError::Asn);
        }

        match asn_lookup.decode::<geoip2::Asn>() {
            Ok(Some(asn)) => Ok(asn_record_from_asn(&asn)),
            Ok(None) => Err(LookupError::Asn),
            Err(e) => {
                log::debug!("Failed to decode ASN record for {ip}: {e}");
                Err(LookupError::Asn)
            }
        }
    }
}

/// Converts a City record, localizing every name to [`NAME_LOCALE`].
///
/// Only the first (largest) subdivision is kept.
pub(crate) fn geo_record_from_city(city: &geoip2::City<'_>) -> GeoRecord {
    let province = match city.subdivisions.first() {
        Some(subdivision) => localized_name(&subdivision.names),
        None => UNKNOWN_PROVINCE.to_string(),
    };

    GeoRecord {
        country: localized_name(&city.country.names),
        province,
        city: localized_name(&city.city.names),
        latitude: city.location.latitude.unwrap_or_default(),
        longitude: city.location.longitude.unwrap_or_default(),
    }
}

pub(crate) fn asn_record_from_asn(asn: &geoip2::Asn<'_>) -> AsnRecord {
    AsnRecord {
        number: asn.autonomous_system_number.unwrap_or_default(),
        organization: asn
            .autonomous_system_organization
            .unwrap_or_default()
            .to_string(),
    }
}

/// Name in [`NAME_LOCALE`], or an empty string when that translation is missing.
fn localized_name(names: &Names<'_>) -> String {
    name_for_locale(names, NAME_LOCALE)
        .unwrap_or_default()
        .to_string()
}

fn name_for_locale<'a>(names: &Names<'a>, locale: &str) -> Option<&'a str> {
    match locale {
        "de" => names.german,
        "en" => names.english,
        "es" => names.spanish,
        "fr" => names.french,
        "ja" => names.japanese,
        "pt-BR" => names.brazilian_portuguese,
        "ru" => names.russian,
        "zh-CN" => names.simplified_chinese,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxminddb::geoip2::city;

    fn names(english: &'static str, chinese: Option<&'static str>) -> Names<'static> {
        Names {
            english: Some(english),
            simplified_chinese: chinese,
            ..Default::default()
        }
    }

    fn subdivision(english: &'static str, chinese: &'static str) -> city::Subdivision<'static> {
        city::Subdivision {
            names: names(english, Some(chinese)),
            ..Default::default()
        }
    }

    fn sample_city(subdivisions: Vec<city::Subdivision<'static>>) -> geoip2::City<'static> {
        geoip2::City {
            city: city::City {
                names: names("Hangzhou", Some("杭州")),
                ..Default::default()
            },
            country: city::Country {
                names: names("China", Some("中国")),
                ..Default::default()
            },
            location: city::Location {
                latitude: Some(30.2936),
                longitude: Some(120.1614),
                ..Default::default()
            },
            subdivisions,
            ..Default::default()
        }
    }

    #[test]
    fn test_geo_record_uses_chinese_names() {
        let record = geo_record_from_city(&sample_city(vec![subdivision("Zhejiang", "浙江")]));
        assert_eq!(record.country, "中国");
        assert_eq!(record.province, "浙江");
        assert_eq!(record.city, "杭州");
        assert_eq!(record.latitude, 30.2936);
        assert_eq!(record.longitude, 120.1614);
    }

    #[test]
    fn test_geo_record_without_subdivisions_is_unknown_province() {
        let record = geo_record_from_city(&sample_city(Vec::new()));
        assert_eq!(record.province, "unknown");
    }

    #[test]
    fn test_geo_record_takes_first_subdivision() {
        let record = geo_record_from_city(&sample_city(vec![
            subdivision("England", "英格兰"),
            subdivision("Oxfordshire", "牛津郡"),
        ]));
        assert_eq!(record.province, "英格兰");
    }

    #[test]
    fn test_geo_record_missing_translation_is_empty() {
        let mut city = sample_city(vec![city::Subdivision {
            names: names("Bavaria", None),
            ..Default::default()
        }]);
        city.city.names = names("Smalltown", None);
        let record = geo_record_from_city(&city);
        assert_eq!(record.city, "");
        assert_eq!(record.province, "", "a present subdivision without translation is empty, not unknown");
        assert_eq!(record.country, "中国");
    }

    #[test]
    fn test_geo_record_missing_location_defaults_to_zero() {
        let mut city = sample_city(Vec::new());
        city.location = city::Location::default();
        let record = geo_record_from_city(&city);
        assert_eq!(record.latitude, 0.0);
        assert_eq!(record.longitude, 0.0);
    }

    #[test]
    fn test_asn_record_conversion() {
        let asn = geoip2::Asn {
            autonomous_system_number: Some(15169),
            autonomous_system_organization: Some("GOOGLE"),
        };
        assert_eq!(
            asn_record_from_asn(&asn),
            AsnRecord {
                number: 15169,
                organization: "GOOGLE".to_string()
            }
        );
    }

    #[test]
    fn test_asn_record_missing_fields_default() {
        let asn = geoip2::Asn {
            autonomous_system_number: None,
            autonomous_system_organization: None,
        };
        assert_eq!(asn_record_from_asn(&asn), AsnRecord::default());
    }

    #[test]
    fn test_name_for_locale() {
        let names = Names {
            english: Some("Germany"),
            german: Some("Deutschland"),
            ..Default::default()
        };
        assert_eq!(name_for_locale(&names, "en"), Some("Germany"));
        assert_eq!(name_for_locale(&names, "de"), Some("Deutschland"));
        assert_eq!(name_for_locale(&names, "zh-CN"), None);
        assert_eq!(name_for_locale(&names, "xx"), None);
    }
}
