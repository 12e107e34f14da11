//! Content shipped with the site, shown until the first successful fetch.

use crate::models::{
    ContentDocument, GalleryItem, Hero, Leadership, LogoBlock, LogoPhilosophy, Member,
    NewsCategory, NewsItem, VisionMission,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn officer(id: &str, role: &str, name: &str, image: &str, duties: &[&str]) -> Member {
    Member {
        id: id.to_string(),
        role: role.to_string(),
        name: name.to_string(),
        image_ref: image.to_string(),
        responsibilities: Some(strings(duties)),
        skills: None,
        members: None,
    }
}

fn skilled(id: &str, role: &str, name: &str, image: &str, skills: &[&str]) -> Member {
    Member {
        id: id.to_string(),
        role: role.to_string(),
        name: name.to_string(),
        image_ref: image.to_string(),
        responsibilities: None,
        skills: Some(strings(skills)),
        members: None,
    }
}

fn commission(coordinator: Member, members: Vec<Member>) -> Member {
    Member {
        members: Some(members),
        ..coordinator
    }
}

fn photo(id: i64, seed: &str, caption: &str) -> GalleryItem {
    GalleryItem {
        id,
        image_ref: format!("https://picsum.photos/seed/{seed}/600/400"),
        caption: caption.to_string(),
    }
}

fn news(id: i64, title: &str, body: &str, category: NewsCategory, date: &str) -> NewsItem {
    NewsItem {
        id,
        title: title.to_string(),
        body: body.to_string(),
        category,
        display_date: date.to_string(),
    }
}

/// The fully populated document bundled with the site.
pub fn default_document() -> ContentDocument {
    ContentDocument {
        hero: Hero {
            background_image: "https://images.unsplash.com/photo-1541339907198-e08756dedf3f?q=80&w=2070&auto=format&fit=crop".to_string(),
        },
        vision_mission: VisionMission {
            vision: "Mengembangkan Badan Legislatif Mahasiswa sebagai organisasi pionir yang bersinergi menciptakan inovasi, dan menginspirasi melalui peningkatan kerja sama dan kekeluargaan.".to_string(),
            mission: strings(&[
                "Menjalankan setiap tugas dan tanggung jawab BLM berlandaskan iman dan taqwa.",
                "Menjadikan BLM sebagai mediator dalam berkomunikasi, berdiskusi, serta menampung dan menyalurkan aspirasi.",
                "Mengembangkan BLM agar dapat menciptakan inovasi, menginspirasi, serta pelayanan terbaik secara konsisten memberikan keberkahan.",
                "Bersinergi bersama untuk mewujudkan aspirasi demi kemajuan Poltekkes Kemenkes Mataram.",
            ]),
        },
        gallery: vec![
            photo(1, "event1", "Pelatihan Kelegislatifan untuk anggota baru periode 2024."),
            photo(2, "meeting2", "Rapat Dengar Pendapat bersama pimpinan kampus."),
            photo(3, "campus3", "Suasana kampus Poltekkes Kemenkes Mataram."),
            photo(4, "team4", "Foto bersama seluruh anggota BLM periode 2024/2025."),
            photo(5, "activity5", "Kegiatan studi banding ke universitas lain."),
            photo(6, "official6", "Momen pelantikan pengurus baru oleh Direktur."),
        ],
        news: vec![
            news(
                1661430000000,
                "Pelatihan Kelegislatifan 2024",
                "Pelatihan dasar mengenai fungsi dan tugas legislatif bagi seluruh anggota baru untuk meningkatkan pemahaman dan kinerja.",
                NewsCategory::Agenda,
                "25 Agu 2024",
            ),
            news(
                1660825200000,
                "Hasil Kongres Mahasiswa",
                "Telah ditetapkan Anggaran Dasar/Anggaran Rumah Tangga (AD/ART) dan Garis Besar Haluan Kerja (GBHK) baru untuk periode 2024/2025.",
                NewsCategory::News,
                "18 Agu 2024",
            ),
            news(
                1660566000000,
                "Jadwal Ujian Akhir Semester Ganjil",
                "Diberitahukan kepada seluruh mahasiswa bahwa Ujian Akhir Semester (UAS) akan dilaksanakan mulai tanggal 10 September 2024.",
                NewsCategory::Announcement,
                "15 Agu 2024",
            ),
            news(
                1659356400000,
                "Studi Banding Antar Lembaga",
                "Kegiatan studi banding dengan lembaga legislatif universitas lain untuk bertukar pikiran dan inovasi.",
                NewsCategory::Agenda,
                "01 Agu 2024",
            ),
        ],
        leadership: Leadership {
            top: vec![
                officer(
                    "ketua",
                    "Ketua Umum",
                    "Aulia Dini Mardiati",
                    "https://i.pravatar.cc/150?u=ketua_aulia",
                    &["Memimpin & mengkoordinir", "Bertanggung jawab umum", "Mewakili organisasi"],
                ),
                officer(
                    "wakil",
                    "Wakil Ketua Umum",
                    "Dina Aulia Febrianti",
                    "https://i.pravatar.cc/150?u=wakil_dina",
                    &["Membantu Ketua Umum", "Menggantikan tugas Ketua", "Koordinasi internal"],
                ),
            ],
            mid: vec![
                officer(
                    "sekum",
                    "Sekretaris Umum",
                    "Bq. Amalia Ariska",
                    "https://i.pravatar.cc/150?u=sekretaris_amalia",
                    &["Administrasi & surat-menyurat", "Notulensi rapat", "Pengarsipan dokumen"],
                ),
                officer(
                    "bendum",
                    "Bendahara Umum",
                    "Rizki Lailatul Fajri",
                    "https://i.pravatar.cc/150?u=bendahara_rizki",
                    &["Manajemen keuangan", "Membuat laporan keuangan", "Verifikasi anggaran"],
                ),
            ],
            commissions: vec![
                commission(
                    skilled(
                        "kom1",
                        "Koordinator Komisi I",
                        "Asadilla Al Riski",
                        "https://i.pravatar.cc/150?u=asadilla",
                        &["Analisis Kebijakan", "Monitoring", "Evaluasi Program"],
                    ),
                    vec![
                        skilled(
                            "kom1-1",
                            "Anggota",
                            "Reni Nurnaningsi",
                            "https://i.pravatar.cc/100?u=reni",
                            &["Riset", "Observasi"],
                        ),
                        skilled(
                            "kom1-2",
                            "Anggota",
                            "M. Chandra Egi Junanda",
                            "https://i.pravatar.cc/100?u=chandra",
                            &["Wawancara", "Kritis"],
                        ),
                    ],
                ),
                commission(
                    skilled(
                        "kom2",
                        "Koordinator Komisi II",
                        "(Belum Terisi)",
                        "https://i.pravatar.cc/150?u=kosong",
                        &["Manajemen Anggaran", "Audit", "Akuntansi"],
                    ),
                    vec![skilled(
                        "kom2-1",
                        "Anggota",
                        "Wiwin Hastika Septiana",
                        "https://i.pravatar.cc/100?u=wiwinh",
                        &["Akuntansi Dasar", "Teliti"],
                    )],
                ),
                commission(
                    skilled(
                        "kom3",
                        "Koordinator Komisi III",
                        "Nela Deswinta",
                        "https://i.pravatar.cc/150?u=nela",
                        &["Legal Drafting", "Perancangan UU", "Arsip"],
                    ),
                    vec![skilled(
                        "kom3-1",
                        "Anggota",
                        "Wiwin Atqiya",
                        "https://i.pravatar.cc/100?u=wiwina",
                        &["Riset Hukum", "Menulis"],
                    )],
                ),
                commission(
                    skilled(
                        "kom4",
                        "Koordinator Komisi IV",
                        "Melita Khairunnisa",
                        "https://i.pravatar.cc/150?u=melita",
                        &["Public Speaking", "Media Sosial", "Networking"],
                    ),
                    vec![skilled(
                        "kom4-1",
                        "Anggota",
                        "Arifiani Rastim",
                        "https://i.pravatar.cc/100?u=arifiani",
                        &["Desain Grafis", "Humas"],
                    )],
                ),
            ],
        },
        logo_philosophy: LogoPhilosophy {
            primary: LogoBlock {
                title: "Filosofi Logo BLM".to_string(),
                image_ref: "/BLMPoltekkesMTR/logo.jpg".to_string(),
                details: strings(&[
                    "Tiga Bintang: Melambangkan Tri Dharma Perguruan Tinggi (Pendidikan, Penelitian, dan Pengabdian).",
                    "Padi dan Kapas: Simbol kesejahteraan dan keadilan sosial bagi seluruh mahasiswa.",
                    "Tugu Legislasi: Pilar utama demokrasi, hukum, dan konstitusi organisasi.",
                    "Lingkaran Merah Putih: Semangat nasionalisme dan persatuan dalam bingkai NKRI.",
                ]),
            },
            secondary: LogoBlock {
                title: "Filosofi Kabinet Sinergi Inovasi".to_string(),
                image_ref: "https://via.placeholder.com/200x200.png?text=Logo+Kabinet".to_string(),
                details: strings(&[
                    "Roda Gigi: Sinergi dan kolaborasi antar komisi dan dengan lembaga lain.",
                    "Api Obor: Semangat yang menyala untuk terus berinovasi dan memberikan pencerahan.",
                    "Perisai: Fungsi pengawasan sebagai pelindung konstitusi dan penjaga aspirasi mahasiswa.",
                    "Warna Emas: Melambangkan kejayaan, prestasi, dan harapan untuk masa depan gemilang.",
                ]),
            },
        },
    }
}
