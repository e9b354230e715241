//! Traced API functions to verify.
//!
//! The five gRPC operations whose production logs should carry
//! location/address data in their response bodies.

/// One traced API operation and the response fields expected to appear in
/// its logs.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub expected_fields: &'static [&'static str],
    pub description: &'static str,
}

/// The functions to verify, in report order.
pub const API_FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec {
        name: "GetDeliveryOrder",
        expected_fields: &["coordinates", "address", "latitude", "longitude"],
        description: "Single order lookup with address/coordinates",
    },
    FunctionSpec {
        name: "GetTripDetails",
        expected_fields: &["orders", "coordinates", "address", "tripID"],
        description: "All orders in a trip with addresses",
    },
    FunctionSpec {
        name: "GetRouteDetailsForTrip",
        expected_fields: &["routeSegments", "planned", "actual"],
        description: "Route waypoints (planned vs actual)",
    },
    FunctionSpec {
        name: "GetLocationsDetails",
        expected_fields: &["locations", "locationNumber", "coordinates", "address"],
        description: "Restaurant address/coordinates by location_number",
    },
    FunctionSpec {
        name: "GetDeliveryDriverByID",
        expected_fields: &["driver", "coordinates", "driverStatus"],
        description: "Driver current GPS location",
    },
];
