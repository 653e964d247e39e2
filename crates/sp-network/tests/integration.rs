//! Integration tests for sp-network.

use sp_network::{Link, NetworkBuilder};

#[test]
fn build_minimal_network() {
    // Build: Amsterdam --46-- Den Haag
    let mut builder = NetworkBuilder::new();
    let amsterdam = builder.add_station("Amsterdam");
    let den_haag = builder.add_station("Den Haag");
    builder.link(amsterdam, den_haag, 46);

    let network = builder.build().unwrap();

    assert_eq!(network.station_count(), 2);
    assert_eq!(network.graph().link_count(), 1);

    // Registry resolves both names, and nothing else.
    assert_eq!(network.registry().lookup("Amsterdam"), Some(amsterdam));
    assert_eq!(network.registry().lookup("Den Haag"), Some(den_haag));
    assert_eq!(network.registry().lookup("Den Helder"), None);

    // Both directed records exist with the same minutes.
    assert_eq!(
        network.graph().neighbors(amsterdam),
        &[Link {
            station: den_haag,
            minutes: 46
        }]
    );
    assert_eq!(
        network.graph().neighbors(den_haag),
        &[Link {
            station: amsterdam,
            minutes: 46
        }]
    );
}

#[test]
fn star_topology_degrees() {
    // Hub with three spokes.
    let mut builder = NetworkBuilder::new();
    let hub = builder.add_station("Utrecht");
    let spokes = [
        builder.add_station("Amsterdam"),
        builder.add_station("Eindhoven"),
        builder.add_station("Zwolle"),
    ];
    for (i, &spoke) in spokes.iter().enumerate() {
        builder.link(hub, spoke, 20 + i as u32);
    }

    let network = builder.build().unwrap();

    assert_eq!(network.graph().neighbors(hub).len(), 3);
    for &spoke in &spokes {
        assert_eq!(network.graph().neighbors(spoke).len(), 1);
    }
}

#[test]
fn disruption_sequence_on_built_network() {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_station("A");
    let b = builder.add_station("B");
    let c = builder.add_station("C");
    builder.link(a, b, 1);
    builder.link(b, c, 2);
    builder.link(a, c, 3);
    let mut network = builder.build().unwrap();

    network.remove_link(a, b);
    network.remove_link(a, b); // repeat is tolerated
    network.remove_link(c, b);

    assert_eq!(network.graph().link_count(), 1);
    assert_eq!(network.graph().neighbors(b).len(), 0);
    assert_eq!(network.graph().neighbors(a).len(), 1);
}

#[test]
fn isolated_station_has_no_neighbors() {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_station("A");
    let b = builder.add_station("B");
    let lonely = builder.add_station("Lonely");
    builder.link(a, b, 9);
    let network = builder.build().unwrap();

    assert!(network.graph().neighbors(lonely).is_empty());
}

#[test]
fn larger_network_builds() {
    let mut builder = NetworkBuilder::new();
    let mut ids = Vec::new();
    for i in 0..100 {
        ids.push(builder.add_station(format!("Station {}", i)));
    }
    for window in ids.windows(2) {
        builder.link(window[0], window[1], 7);
    }
    let network = builder.build().unwrap();

    assert_eq!(network.station_count(), 100);
    assert_eq!(network.graph().link_count(), 99);
    // Interior stations have two neighbors, the ends one.
    assert_eq!(network.graph().neighbors(ids[0]).len(), 1);
    assert_eq!(network.graph().neighbors(ids[50]).len(), 2);
    assert_eq!(network.graph().neighbors(ids[99]).len(), 1);
}
