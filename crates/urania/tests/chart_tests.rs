use urania::angle::{normalize, shortest_separation};
use urania::aspects::{AspectKind, ChartPoint, ASPECTS};
use urania::ephemeris::{CelestialBody, RawChart};
use urania::houses::{house_arc, arc_contains, AngularPoint};
use urania::lunar::PhaseName;
use urania::western::Sign;
use urania::{assemble_chart, Chart, ChartMeta};

fn fixture() -> RawChart {
    serde_json::from_str(include_str!("fixtures/raw_chart.json")).unwrap()
}

fn meta() -> ChartMeta {
    ChartMeta {
        date: "2024-03-05".to_string(),
        time: "14:30:00".to_string(),
        timezone: "America/New_York".to_string(),
        latitude: 40.7128,
        longitude: -74.006,
    }
}

fn chart() -> Chart {
    assemble_chart(meta(), &fixture())
}

#[test]
fn test_input_is_echoed() {
    let chart = chart();
    assert_eq!(chart.date, "2024-03-05");
    assert_eq!(chart.time, "14:30:00");
    assert_eq!(chart.timezone, "America/New_York");
    assert_eq!(chart.latitude, 40.7128);
    assert_eq!(chart.longitude, -74.006);
    assert_eq!(chart.julian_day, 2460375.3125);
}

#[test]
fn test_bodies_get_sign_house_and_motion() {
    let chart = chart();

    let sun = chart.bodies.get(CelestialBody::Sun).unwrap();
    assert_eq!(sun.sign, Sign::Pisces);
    assert_eq!(sun.house, 9);
    assert!(!sun.retrograde);
    assert_eq!(sun.longitude_formatted, "15°12’");

    let jupiter = chart.bodies.get(CelestialBody::Jupiter).unwrap();
    assert_eq!(jupiter.sign, Sign::Taurus);
    assert_eq!(jupiter.house, 11);

    assert!(chart.bodies.get(CelestialBody::TrueNode).unwrap().retrograde);
    assert!(chart.bodies.get(CelestialBody::MeanNode).unwrap().retrograde);
}

#[test]
fn test_absent_body_does_not_block_chart() {
    let chart = chart();
    assert!(chart.bodies.get(CelestialBody::Lilith).is_none());
    assert_eq!(chart.bodies.len(), 13);
}

#[test]
fn test_all_twelve_houses_with_four_named_angles() {
    let chart = chart();
    for number in 1..=12u8 {
        let house = chart.houses.get(number).unwrap();
        assert_eq!(house.number, number);
        assert_eq!(house.is_angular, matches!(number, 1 | 4 | 7 | 10));
        assert_eq!(house.name.is_some(), house.is_angular);
    }
    assert_eq!(chart.houses.get(1).unwrap().name, Some(AngularPoint::Ascendant));
    assert_eq!(chart.houses.get(10).unwrap().name, Some(AngularPoint::Mc));

    let ic = chart.houses.get(4).unwrap().longitude;
    let dsc = chart.houses.get(7).unwrap().longitude;
    assert!((ic - 184.1).abs() < 1e-9);
    assert!((dsc - 298.4).abs() < 1e-9);
}

#[test]
fn test_every_body_lies_in_its_house_arc() {
    let chart = chart();
    let cusps = chart.houses.cusps();
    for body in chart.bodies.iter() {
        let (start, end) = house_arc(body.house, &cusps);
        assert!(arc_contains(start, end, body.longitude), "{} outside house {}", body.name, body.house);
    }
}

#[test]
fn test_house_rulers_match_body_positions() {
    let chart = chart();
    for house in chart.houses.iter() {
        assert_eq!(house.sign_ruler, house.house_ruler);
        match (chart.bodies.get(house.sign_ruler), &house.ruler_position) {
            (Some(ruler), Some(position)) => {
                assert_eq!(position.sign, ruler.sign);
                assert_eq!(position.house, ruler.house);
                assert_eq!(position.longitude, ruler.longitude);
            }
            (None, None) => {}
            _ => panic!("ruler snapshot of house {} disagrees with bodies", house.number),
        }
    }

    // Cancer rising: the Moon rules house 1
    let first = chart.houses.get(1).unwrap();
    assert_eq!(first.sign_ruler, CelestialBody::Moon);
    assert_eq!(first.ruler_position.as_ref().unwrap().house, 6);
}

#[test]
fn test_moon_carries_phase() {
    let chart = chart();
    let moon = chart.bodies.get(CelestialBody::Moon).unwrap();
    let phase = moon.phase.as_ref().unwrap();
    assert_eq!(phase.phase, PhaseName::WaningCrescent);
    assert_eq!(phase.angle, 306.9);
    assert!(chart.bodies.get(CelestialBody::Sun).unwrap().phase.is_none());
}

#[test]
fn test_no_phase_without_the_sun() {
    let mut raw = fixture();
    raw.bodies.insert(CelestialBody::Sun, None);
    let chart = assemble_chart(meta(), &raw);
    assert!(chart.bodies.get(CelestialBody::Moon).unwrap().phase.is_none());
}

#[test]
fn test_aspects_include_angles_and_respect_orbs() {
    let chart = chart();

    let neptune_mc = chart
        .aspects
        .iter()
        .find(|a| {
            a.body_a == ChartPoint::Body(CelestialBody::Neptune)
                && a.body_b == ChartPoint::Angle(AngularPoint::Mc)
        })
        .unwrap();
    assert_eq!(neptune_mc.aspect, AspectKind::Conjunction);
    assert_eq!(neptune_mc.orb, 7.7);
    assert!(neptune_mc.applying);

    let jupiter_uranus = chart
        .aspects
        .iter()
        .find(|a| {
            a.body_a == ChartPoint::Body(CelestialBody::Jupiter)
                && a.body_b == ChartPoint::Body(CelestialBody::Uranus)
        })
        .unwrap();
    assert_eq!(jupiter_uranus.aspect, AspectKind::Conjunction);
    assert_eq!(jupiter_uranus.orb, 0.7);

    for aspect in &chart.aspects {
        let max_orb = ASPECTS.iter().find(|d| d.kind == aspect.aspect).unwrap().max_orb;
        assert!(aspect.orb >= 0.0 && aspect.orb <= max_orb);
        assert_ne!(aspect.body_a, aspect.body_b);
    }

    // Ascendant and DSC are always opposed
    assert!(chart.aspects.iter().any(|a| {
        a.body_a == ChartPoint::Angle(AngularPoint::Ascendant)
            && a.body_b == ChartPoint::Angle(AngularPoint::Dsc)
            && a.aspect == AspectKind::Opposition
            && a.orb == 0.0
    }));
}

#[test]
fn test_non_angular_cusps_take_no_part_in_aspects() {
    let chart = chart();
    let points: Vec<ChartPoint> = chart
        .aspects
        .iter()
        .flat_map(|a| [a.body_a, a.body_b])
        .filter(|p| matches!(p, ChartPoint::Angle(_)))
        .collect();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| matches!(
        p,
        ChartPoint::Angle(AngularPoint::Ascendant | AngularPoint::Mc | AngularPoint::Ic | AngularPoint::Dsc)
    )));
}

#[test]
fn test_bodies_precede_angles_in_aspect_pairs() {
    let chart = chart();
    for aspect in &chart.aspects {
        if let ChartPoint::Angle(_) = aspect.body_a {
            assert!(matches!(aspect.body_b, ChartPoint::Angle(_)));
        }
    }
}

#[test]
fn test_assembly_is_idempotent() {
    let raw = fixture();
    let first = assemble_chart(meta(), &raw);
    let second = assemble_chart(meta(), &raw);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_chart_json_shape() {
    let json = serde_json::to_value(chart()).unwrap();

    assert!(json["bodies"]["Lilith"].is_null());
    assert_eq!(json["bodies"]["Sun"]["sign"], "Pisces");
    assert_eq!(json["bodies"]["Sun"]["house_formatted"], "House 9");
    assert_eq!(json["bodies"]["Moon"]["phase"]["phase"], "Waning Crescent");
    assert!(json["bodies"]["Sun"].get("phase").is_none());

    let houses = json["houses"].as_object().unwrap();
    assert_eq!(houses.len(), 12);
    for number in 1..=12 {
        assert!(houses.contains_key(&number.to_string()));
    }
    assert_eq!(json["houses"]["1"]["name"], "Ascendant");
    assert_eq!(json["houses"]["1"]["sign_ruler"], "Moon");
    assert!(json["houses"]["2"].get("name").is_none());
    assert_eq!(json["houses"]["2"]["is_angular"], false);

    let aspect = &json["aspects"][0];
    for key in ["body_a", "body_b", "aspect", "orb", "applying"] {
        assert!(aspect.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_opposition_example_through_whole_chart() {
    let mut raw = fixture();
    let sample = |lon: f64| {
        let mut s = raw.sample(CelestialBody::Sun).unwrap();
        s.current.longitude = lon;
        s.previous.longitude = lon - 0.04;
        Some(s)
    };
    let sun = sample(10.0);
    let moon = sample(190.0);
    raw.bodies.clear();
    raw.bodies.insert(CelestialBody::Sun, sun);
    raw.bodies.insert(CelestialBody::Moon, moon);

    let chart = assemble_chart(meta(), &raw);
    let between: Vec<_> = chart
        .aspects
        .iter()
        .filter(|a| a.body_a == ChartPoint::Body(CelestialBody::Sun) && a.body_b == ChartPoint::Body(CelestialBody::Moon))
        .collect();
    assert_eq!(between.len(), 1);
    assert_eq!(between[0].aspect, AspectKind::Opposition);
    assert_eq!(between[0].orb, 0.0);
    assert_eq!(shortest_separation(normalize(10.0), normalize(190.0)), 180.0);

    let phase = chart.bodies.get(CelestialBody::Moon).unwrap().phase.clone().unwrap();
    assert_eq!(phase.phase, PhaseName::FullMoon);
    assert_eq!(phase.illumination, 100.0);
}

#[test]
fn test_rounded_position_reports_the_sign_it_carried_into() {
    let mut raw = fixture();
    let mut sun = raw.sample(CelestialBody::Sun).unwrap();
    // 29°59.7′ Aries rounds to 0°00′ Taurus
    sun.current.longitude = 29.0 + 59.7 / 60.0;
    sun.previous.longitude = sun.current.longitude - 0.04;
    raw.bodies.insert(CelestialBody::Sun, Some(sun));

    let chart = assemble_chart(meta(), &raw);
    let body = chart.bodies.get(CelestialBody::Sun).unwrap();
    assert_eq!(body.sign, Sign::Aries);
    assert_eq!(body.longitude_formatted, "0°00’");
    assert_eq!(body.formatted_sign, Sign::Taurus);

    // the Sun rules the Leo cusp of house 2; its snapshot keeps the carry
    let second = chart.houses.get(2).unwrap();
    assert_eq!(second.sign_ruler, CelestialBody::Sun);
    let ruler = second.ruler_position.as_ref().unwrap();
    assert_eq!(ruler.sign, Sign::Aries);
    assert_eq!(ruler.formatted_sign, Sign::Taurus);

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["bodies"]["Sun"]["sign"], "Aries");
    assert_eq!(json["bodies"]["Sun"]["formatted_sign"], "Taurus");
    assert_eq!(json["houses"]["2"]["ruler_position"]["formatted_sign"], "Taurus");
}
