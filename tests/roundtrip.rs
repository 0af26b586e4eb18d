//! End-to-end coverage of the concrete scenarios in spec §8, driven
//! entirely through the public API.

use ec_gf2::coder::{Coder, STANDARD_DEGREE, STANDARD_MODULUS};
use ec_gf2::field::Field;
use ec_gf2::harness::{binomial, run_exhaustive};
use ec_gf2::matrix::Matrix;
use ec_gf2::Error;

#[test]
fn scenario_1_k4_p2_de_ad_be_ef() {
    let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
    let coder = Coder::new(&field, 4, 2).unwrap();
    let data = [0xde_u8, 0xad, 0xbe, 0xef];

    let parity = coder.encode(&data).unwrap();
    let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();
    assert_eq!(codeword.len(), 6);

    let unchanged = coder.decode(&data, &[0, 1, 2, 3]).unwrap();
    assert_eq!(unchanged, data);

    for indices in [[0usize, 1, 4, 5], [2, 3, 4, 5]] {
        let input: Vec<u8> = indices.iter().map(|&i| codeword[i]).collect();
        let decoded = coder.decode(&input, &indices).unwrap();
        assert_eq!(decoded, data);
    }
}

#[test]
fn scenario_2_k3_p2_exhaustive_ten_combinations() {
    let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
    let coder = Coder::new(&field, 3, 2).unwrap();
    let data = [0x01u8, 0x02, 0x03];
    let parity = coder.encode(&data).unwrap();
    let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();

    assert_eq!(binomial(5, 3), 10);
    let report = run_exhaustive(&coder, &data, &codeword);
    assert_eq!(report.total, 10);
    assert!(report.all_passed());
}

#[test]
fn scenario_3_k8_p4_exhaustive_495_combinations() {
    let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
    let coder = Coder::new(&field, 8, 4).unwrap();
    let data: Vec<u8> = (0..8u8).map(|i| i.wrapping_mul(53).wrapping_add(9)).collect();
    let parity = coder.encode(&data).unwrap();
    let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();

    assert_eq!(binomial(12, 8), 495);
    let report = run_exhaustive(&coder, &data, &codeword);
    assert_eq!(report.total, 495);
    assert!(report.all_passed());
}

#[test]
fn scenario_4_field_init_rejects_bad_parameters() {
    assert!(matches!(Field::new(9, 0x211), Err(Error::InvalidParameter(_))));
    assert!(matches!(Field::new(8, 100), Err(Error::InvalidParameter(_))));
}

#[test]
fn scenario_5_matrix_inverse_edge_cases() {
    let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();

    let zero = Matrix::create(3, 3).unwrap();
    assert_eq!(zero.invert(&field), Err(Error::Singular));

    let mut id = Matrix::create(3, 3).unwrap();
    id.identity();
    assert_eq!(id.invert(&field).unwrap(), id);
}

#[test]
fn coder_round_trip_property_across_sizes_and_subsets() {
    let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
    for &(k, p) in &[(1usize, 1usize), (2, 1), (4, 2), (5, 3)] {
        let coder = Coder::new(&field, k, p).unwrap();
        let data: Vec<u8> = (0..k).map(|i| (i * 31 + 7) as u8).collect();
        let parity = coder.encode(&data).unwrap();
        let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();

        for indices in ec_gf2::harness::combinations(coder.n(), k) {
            let input: Vec<u8> = indices.iter().map(|&i| codeword[i]).collect();
            let decoded = coder.decode(&input, &indices).unwrap();
            assert_eq!(decoded, data, "k={} p={} indices={:?}", k, p, indices);
        }
    }
}
