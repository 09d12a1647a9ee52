use smartbunk::algorithm::max_safe_bunks;
use smartbunk::{allocate, allocate_report, allocate_with_default, RequiredPercentage, SubjectRecord};

fn bunks(subjects: &[SubjectRecord], p: f64) -> Vec<u64> {
    allocate(subjects, RequiredPercentage::new(p).unwrap()).iter().map(|r| r.allocated_bunks).collect()
}

#[test]
fn test_escenario_dos_asignaturas() {
    let subjects = vec![SubjectRecord::new("A", 40, 50), SubjectRecord::new("B", 18, 20)];
    // pool floor(5.5 / 0.75) = 7; A recibe 1 + 2 del sobrante, B queda en su techo
    assert_eq!(bunks(&subjects, 0.75), vec![3, 4]);
}

#[test]
fn test_orden_de_entrada_se_conserva() {
    let subjects = vec![
        SubjectRecord::new("Quimica", 10, 20),
        SubjectRecord::new("Calculo 1", 40, 50),
        SubjectRecord::new("Taller", 0, 0),
        SubjectRecord::new("Fisica", 18, 20),
    ];
    let out = allocate_with_default(&subjects);
    let names: Vec<&str> = out.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(names, vec!["Quimica", "Calculo 1", "Taller", "Fisica"]);
    assert_eq!(out[0].allocated_bunks, 0);
    assert_eq!(out[2].allocated_bunks, 0);
}

#[test]
fn test_asignatura_bajo_el_minimo_reduce_el_pool() {
    // Quimica (50%) consume margen global: 68/90 -> floor((68 - 67.5)/0.75) = 0
    let subjects = vec![
        SubjectRecord::new("Quimica", 10, 20),
        SubjectRecord::new("Calculo 1", 40, 50),
        SubjectRecord::new("Fisica", 18, 20),
    ];
    assert_eq!(bunks(&subjects, 0.75), vec![0, 0, 0]);
}

#[test]
fn test_porcentaje_cien() {
    let subjects = vec![SubjectRecord::new("A", 10, 10), SubjectRecord::new("B", 9, 10)];
    assert_eq!(bunks(&subjects, 1.0), vec![0, 0]);
}

#[test]
fn test_porcentaje_bajo_reparte_mas() {
    // 50%: pool floor((30 - 20)/0.5) = 20, techos A=10, B=10
    let subjects = vec![SubjectRecord::new("A", 20, 30), SubjectRecord::new("B", 10, 10)];
    let report = allocate_report(&subjects, RequiredPercentage::new(0.5).unwrap());
    assert_eq!(report.total_bunks_available, 20);
    assert_eq!(report.subjects[0].max_safe_bunks, 10);
    assert_eq!(report.subjects[1].max_safe_bunks, 10);
    assert_eq!(report.allocated_total, 20);
    for s in report.subjects.iter() {
        assert!(s.projected_percent.unwrap() >= 0.5);
    }
}

#[test]
fn test_max_safe_bunks_mantiene_el_porcentaje() {
    let p = RequiredPercentage::default();
    for attend in 0..60u64 {
        for total in attend.max(1)..60u64 {
            let x = max_safe_bunks(attend, total, p);
            assert!(attend as f64 / (total + x) as f64 >= 0.75 || x == 0);
            assert!((attend as f64) / ((total + x + 1) as f64) < 0.75);
        }
    }
}

#[test]
fn test_determinismo() {
    let subjects: Vec<SubjectRecord> = (0..12)
        .map(|i| SubjectRecord::new(format!("Ramo {}", i), 30 + i, 34 + i / 2))
        .collect();
    let first = allocate_with_default(&subjects);
    for _ in 0..50 {
        assert_eq!(allocate_with_default(&subjects), first);
    }
}
