use crate::core::{exported_map, DealerShip, ExportedMap, History, HistoryKind, Truck};

#[derive(Debug, Default)]
pub struct TruckHistory {
    record: Truck,
}

impl History for TruckHistory {
    fn kind(&self) -> HistoryKind {
        HistoryKind::Truck
    }

    fn exported(&self) -> ExportedMap {
        // TODO: hydrate the record from the business layer once a DAL
        // collaborator exists; until then the snapshot keeps default values.
        exported_map(&self.record)
    }
}

#[derive(Debug, Default)]
pub struct DealerShipHistory {
    record: DealerShip,
}

impl History for DealerShipHistory {
    fn kind(&self) -> HistoryKind {
        HistoryKind::DealerShip
    }

    fn exported(&self) -> ExportedMap {
        exported_map(&self.record)
    }
}

/// Builds the history wrapper for `kind` around a freshly default-constructed
/// record. The match is exhaustive over the closed discriminator set; unknown
/// kinds are rejected where text is parsed into `HistoryKind`, so they cannot
/// reach this point.
pub fn history(kind: HistoryKind) -> Box<dyn History> {
    match kind {
        HistoryKind::Truck => Box::new(TruckHistory::default()),
        HistoryKind::DealerShip => Box::new(DealerShipHistory::default()),
    }
}

/// Dispatch and extraction in one step.
pub fn exported(kind: HistoryKind) -> ExportedMap {
    history(kind).exported()
}
