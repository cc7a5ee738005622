use crate::types::Coordinate;

/// The Kaaba, Mecca.
pub const KAABA: Coordinate = Coordinate::new_unchecked(21.4225, 39.8262);

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Initial great-circle bearing from `observer` to `target`, degrees clockwise
/// from true north in [0, 360).
pub fn initial_bearing(observer: Coordinate, target: Coordinate) -> f64 {
    let obs_lat = deg_to_rad(observer.latitude);
    let tgt_lat = deg_to_rad(target.latitude);
    let d_lon = deg_to_rad(target.longitude - observer.longitude);
    let y = d_lon.sin() * tgt_lat.cos();
    let x = obs_lat.cos() * tgt_lat.sin() - obs_lat.sin() * tgt_lat.cos() * d_lon.cos();
    normalize_angle(rad_to_deg(y.atan2(x)))
}

pub fn qibla_bearing(observer: Coordinate) -> f64 {
    initial_bearing(observer, KAABA)
}

/// Qibla bearing rounded to whole degrees for the compass readout.
pub fn qibla_degrees(observer: Coordinate) -> u32 {
    (qibla_bearing(observer).round() as u32) % 360
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    const WINDS: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::NorthEast,
        CompassPoint::East,
        CompassPoint::SouthEast,
        CompassPoint::South,
        CompassPoint::SouthWest,
        CompassPoint::West,
        CompassPoint::NorthWest,
    ];

    /// The four labels drawn around the compass dial.
    pub const CARDINALS: [CompassPoint; 4] = [
        CompassPoint::North,
        CompassPoint::South,
        CompassPoint::West,
        CompassPoint::East,
    ];

    pub fn nearest(bearing: f64) -> CompassPoint {
        let sector = ((normalize_angle(bearing) + 22.5) / 45.0) as usize % 8;
        Self::WINDS[sector]
    }

    pub fn degrees(&self) -> f64 {
        match self {
            CompassPoint::North => 0.0,
            CompassPoint::NorthEast => 45.0,
            CompassPoint::East => 90.0,
            CompassPoint::SouthEast => 135.0,
            CompassPoint::South => 180.0,
            CompassPoint::SouthWest => 225.0,
            CompassPoint::West => 270.0,
            CompassPoint::NorthWest => 315.0,
        }
    }

    pub fn arabic_label(&self) -> &'static str {
        match self {
            CompassPoint::North => "شمال",
            CompassPoint::NorthEast => "شمال شرق",
            CompassPoint::East => "شرق",
            CompassPoint::SouthEast => "جنوب شرق",
            CompassPoint::South => "جنوب",
            CompassPoint::SouthWest => "جنوب غرب",
            CompassPoint::West => "غرب",
            CompassPoint::NorthWest => "شمال غرب",
        }
    }
}
