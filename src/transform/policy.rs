//! Fixed mapping policy for the TMS shipment schema.
//!
//! The flex windows and the service-flag table are business literals awaiting
//! product confirmation; they live here so they can change in one place.

use crate::models::{Code, Specifications};

/// Stop-type key for pickup stops
pub const STOP_TYPE_PICKUP: &str = "1500";
/// Stop-type key for delivery stops
pub const STOP_TYPE_DELIVERY: &str = "1501";

/// Appointment flex on the pickup stop (1 hour)
pub const PICKUP_FLEX_SECS: i64 = 3600;
/// Appointment flex on the delivery stop (4 hours)
pub const DELIVERY_FLEX_SECS: i64 = 4 * 3600;

/// Start date when neither pickup appointment nor ready time is set
pub const DEFAULT_START_OFFSET_HOURS: i64 = 24;
/// Transit assumed when no delivery appointment is set
pub const DEFAULT_TRANSIT_HOURS: i64 = 72;
/// End date used when the supplied end precedes the start
pub const MIN_TRANSIT_HOURS: i64 = 24;

/// Timezone for stops and dates when the Load does not carry one
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Wire format for shipment and appointment dates (UTC)
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const STATUS_COVERED: (&str, &str) = ("2102", "Covered");
pub const STATUS_NOTES: &str = "Created via load bridge integration";

pub const SCHEDULING_BY_APPOINTMENT: (&str, &str) = ("9401", "By appointment");
pub const LAYOVER_UNITS_HOURS: (&str, &str) = ("9900", "hours");
pub const MODE_TRUCKLOAD: (&str, &str) = ("24105", "TL");
pub const SERVICE_TYPE_ANY: (&str, &str) = ("24304", "Any");
pub const CURRENCY_USD: (&str, &str) = ("1550", "USD");
pub const TEMP_UNIT_FAHRENHEIT: (&str, &str) = ("1510", "F");

pub const PICKUP_STOP_SERVICE: (&str, &str) = ("21307", "After hours");
pub const DELIVERY_STOP_SERVICE: (&str, &str) = ("21407", "Delivery Appointment");

pub const ITEM_CATEGORY_OTHER: (&str, &str) = ("22300", "Other");
pub const ITEM_UNIT_PALLETS: (&str, &str) = ("6003", "Pallets");
pub const LINE_ITEM_FREIGHT_FLAT: (&str, &str) = ("1600", "Freight - flat");
pub const EXTERNAL_ID_PURCHASE_ORDER: (&str, &str) = ("1400", "Purchase order #");

/// Placeholder party id; the TMS resolves parties by name on create
pub const DEFAULT_PARTY_ID: i64 = 1;

pub fn code((key, value): (&str, &str)) -> Code {
    Code::new(key, value)
}

/// Leg of the shipment an accessorial applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceScope {
    Pickup,
    Delivery,
    Shipment,
}

impl ServiceScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
            Self::Shipment => "shipment",
        }
    }
}

/// Boolean service flags carried on [`Specifications`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFlag {
    LiftgatePickup,
    LiftgateDelivery,
    InsidePickup,
    InsideDelivery,
    Tarps,
    Oversized,
    Hazmat,
    Straps,
    Permits,
    Escorts,
    Seal,
    CustomBonded,
    Labor,
}

impl ServiceFlag {
    pub fn is_set(self, specs: &Specifications) -> bool {
        match self {
            Self::LiftgatePickup => specs.liftgate_pickup,
            Self::LiftgateDelivery => specs.liftgate_delivery,
            Self::InsidePickup => specs.inside_pickup,
            Self::InsideDelivery => specs.inside_delivery,
            Self::Tarps => specs.tarps,
            Self::Oversized => specs.oversized,
            Self::Hazmat => specs.hazmat,
            Self::Straps => specs.straps,
            Self::Permits => specs.permits,
            Self::Escorts => specs.escorts,
            Self::Seal => specs.seal,
            Self::CustomBonded => specs.custom_bonded,
            Self::Labor => specs.labor,
        }
    }
}

/// One row of the flag -> TMS service table
#[derive(Debug, Clone, Copy)]
pub struct ServiceMapping {
    pub flag: ServiceFlag,
    pub scope: ServiceScope,
    pub key: &'static str,
    pub value: &'static str,
}

const fn mapping(
    flag: ServiceFlag,
    scope: ServiceScope,
    key: &'static str,
    value: &'static str,
) -> ServiceMapping {
    ServiceMapping { flag, scope, key, value }
}

/// Emission order of flag-derived services follows this table
pub const SERVICE_TABLE: [ServiceMapping; 13] = [
    mapping(ServiceFlag::LiftgatePickup, ServiceScope::Pickup, "21301", "Liftgate pickup"),
    mapping(ServiceFlag::InsidePickup, ServiceScope::Pickup, "21302", "Inside pickup"),
    mapping(ServiceFlag::LiftgateDelivery, ServiceScope::Delivery, "21401", "Liftgate delivery"),
    mapping(ServiceFlag::InsideDelivery, ServiceScope::Delivery, "21402", "Inside delivery"),
    mapping(ServiceFlag::Tarps, ServiceScope::Shipment, "21501", "Tarps"),
    mapping(ServiceFlag::Oversized, ServiceScope::Shipment, "21502", "Oversized"),
    mapping(ServiceFlag::Hazmat, ServiceScope::Shipment, "21503", "Hazardous materials"),
    mapping(ServiceFlag::Straps, ServiceScope::Shipment, "21504", "Straps"),
    mapping(ServiceFlag::Permits, ServiceScope::Shipment, "21505", "Permits"),
    mapping(ServiceFlag::Escorts, ServiceScope::Shipment, "21506", "Escorts"),
    mapping(ServiceFlag::Seal, ServiceScope::Shipment, "21507", "Seal"),
    mapping(ServiceFlag::CustomBonded, ServiceScope::Shipment, "21508", "Customs bonded"),
    mapping(ServiceFlag::Labor, ServiceScope::Shipment, "21509", "Labor"),
];

/// Service emitted when a temperature range is present
pub const TEMPERATURE_SERVICE: (&str, &str) = ("21510", "Temperature controlled");
